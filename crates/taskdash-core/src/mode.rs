//! Visualization mode selector

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Raised when a settings value names no known mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown visualization mode `{0}`")]
pub struct UnknownMode(pub String);

/// The six ways a series can be drawn.
///
/// Deserialization fails closed: an unrecognised identifier becomes the
/// default mode instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum VisualizationMode {
    #[default]
    Ring,
    Disc,
    BarsVertical,
    BarsHorizontal,
    Points,
    Area,
}

impl VisualizationMode {
    pub const ALL: [Self; 6] = [
        Self::Ring,
        Self::Disc,
        Self::BarsVertical,
        Self::BarsHorizontal,
        Self::Points,
        Self::Area,
    ];

    /// Stable settings identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Disc => "disc",
            Self::BarsVertical => "bars_vertical",
            Self::BarsHorizontal => "bars_horizontal",
            Self::Points => "points",
            Self::Area => "area",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ring => "Donut",
            Self::Disc => "Pie",
            Self::BarsVertical => "Vertical",
            Self::BarsHorizontal => "Horizontal",
            Self::Points => "Points",
            Self::Area => "Area",
        }
    }

    /// Ring and disc show part-of-whole; the rest compare magnitudes
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Ring | Self::Disc)
    }

    /// Parse a settings value. Case-insensitive, `-` and `_` are interchangeable.
    pub fn from_setting(value: &str) -> Result<Self, UnknownMode> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.id() == normalized)
            .ok_or_else(|| UnknownMode(value.to_string()))
    }

    /// Parse a settings value, falling back to the default mode
    pub fn parse_or_default(value: &str) -> Self {
        Self::from_setting(value).unwrap_or_default()
    }
}

impl FromStr for VisualizationMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_setting(s)
    }
}

impl std::fmt::Display for VisualizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl From<String> for VisualizationMode {
    fn from(value: String) -> Self {
        Self::parse_or_default(&value)
    }
}

impl From<VisualizationMode> for &'static str {
    fn from(mode: VisualizationMode) -> Self {
        mode.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for mode in VisualizationMode::ALL {
            assert_eq!(VisualizationMode::from_setting(mode.id()), Ok(mode));
        }
    }

    #[test]
    fn test_setting_normalization() {
        assert_eq!(
            "Bars-Horizontal".parse::<VisualizationMode>(),
            Ok(VisualizationMode::BarsHorizontal)
        );
        assert_eq!(
            VisualizationMode::from_setting("  AREA "),
            Ok(VisualizationMode::Area)
        );
    }

    #[test]
    fn test_unknown_mode_fails_closed() {
        assert_eq!(
            VisualizationMode::from_setting("radar"),
            Err(UnknownMode("radar".to_string()))
        );
        assert_eq!(
            VisualizationMode::parse_or_default("radar"),
            VisualizationMode::Ring
        );

        let parsed: VisualizationMode = serde_json::from_str("\"hexbin\"").unwrap();
        assert_eq!(parsed, VisualizationMode::Ring);
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&VisualizationMode::BarsVertical).unwrap();
        assert_eq!(json, "\"bars_vertical\"");
        let parsed: VisualizationMode = serde_json::from_str("\"disc\"").unwrap();
        assert_eq!(parsed, VisualizationMode::Disc);
    }

    #[test]
    fn test_arc_modes() {
        let arcs: Vec<_> = VisualizationMode::ALL
            .into_iter()
            .filter(VisualizationMode::is_arc)
            .collect();
        assert_eq!(arcs, [VisualizationMode::Ring, VisualizationMode::Disc]);
    }
}
