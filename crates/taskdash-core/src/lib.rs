//! # taskdash-core
//!
//! Core data model for the task dashboard's proportional chart.
//! Everything here is plain data: no rendering, no timers, no ambient state.

pub mod mode;
pub mod progress;
pub mod series;

pub use mode::*;
pub use progress::*;
pub use series::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// COLOR TOKENS
// ============================================================================

/// Opaque color handed in by the theming collaborator.
///
/// The chart never inspects the token; it only pairs it with the geometry
/// of the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(pub String);

impl ColorToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Token used for placeholders, tracks and guides
    pub fn neutral() -> Self {
        Self(colors::NEUTRAL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ColorToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ============================================================================
// VIEWPORT SIZE CLASS
// ============================================================================

/// Width (in CSS pixels) above which the regular layout is used
pub const REGULAR_BREAKPOINT_PX: f64 = 600.0;

/// Coarse viewport size supplied by the hosting surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    #[default]
    Compact,
    Regular,
}

impl ViewportClass {
    /// Classify a viewport width against the single breakpoint
    pub fn from_width(width_px: f64) -> Self {
        if width_px > REGULAR_BREAKPOINT_PX {
            Self::Regular
        } else {
            Self::Compact
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Compact => "Compact",
            Self::Regular => "Regular",
        }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    /// Inherits the surrounding text color, so it follows whatever theme hosts the chart
    pub const NEUTRAL: &str = "currentColor";
    pub const TRACK: &str = "#00000020";
    pub const GRID: &str = "#80808026";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_breakpoint() {
        assert_eq!(ViewportClass::from_width(320.0), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(600.0), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(601.0), ViewportClass::Regular);
        assert_eq!(ViewportClass::from_width(1280.0), ViewportClass::Regular);
    }

    #[test]
    fn test_color_token_is_opaque() {
        let token = ColorToken::from("var(--status-pending)");
        assert_eq!(token.as_str(), "var(--status-pending)");
        assert_eq!(token.to_string(), "var(--status-pending)");
        assert_eq!(ColorToken::neutral().as_str(), colors::NEUTRAL);
    }

    #[test]
    fn test_viewport_serde() {
        let json = serde_json::to_string(&ViewportClass::Regular).unwrap();
        assert_eq!(json, "\"regular\"");
        let parsed: ViewportClass = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(parsed, ViewportClass::Compact);
    }
}
