//! Bar, point and area extents
//!
//! Linear modes compare magnitudes directly: every extent is normalized
//! against the largest single category, not the total. That is the main
//! behavioral difference from the arc modes.

use taskdash_core::{ColorToken, Series};

/// How linear extents are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinearAxis {
    /// Columns rising from a horizontal baseline
    Vertical,
    /// Rows growing rightwards from a vertical baseline
    Horizontal,
    /// One marker per category along a single axis
    Points,
    /// Columns filled from the baseline up to each point
    Area,
}

/// Normalized extent of one category
#[derive(Debug, Clone, PartialEq)]
pub struct Extent {
    pub index: usize,
    pub label: String,
    pub color: ColorToken,
    pub value: u64,
    /// `value / max_value`, in `[0, 1]`
    pub extent_fraction: f64,
}

/// Normalize each entry against `max_value`.
///
/// A `max_value` of zero is treated as one, so an all-zero series lies flat
/// on the baseline.
pub fn compute_linear_extents(series: &Series, max_value: u64, axis: LinearAxis) -> Vec<Extent> {
    let max = max_value.max(1) as f64;
    tracing::trace!(?axis, max, "computing linear extents");

    series
        .iter()
        .enumerate()
        .map(|(index, entry)| Extent {
            index,
            label: entry.key.clone(),
            color: entry.color.clone(),
            value: entry.value,
            extent_fraction: (entry.value as f64 / max).clamp(0.0, 1.0),
        })
        .collect()
}
