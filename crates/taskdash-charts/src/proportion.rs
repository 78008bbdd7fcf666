//! Part-of-whole proportions for a series
//!
//! Offsets are derived from integer prefix sums rather than by adding up
//! rounded fractions, so segment boundaries never drift and the final
//! boundary lands on exactly `1.0`.

use taskdash_core::Series;

/// Normalized shares of a series total, in series order
#[derive(Debug, Clone, PartialEq)]
pub struct Proportions {
    /// `value / total` per entry; all zero when the total is zero
    pub fractions: Vec<f64>,
    /// Sum of all preceding fractions; `cumulative_offsets[0] == 0`
    pub cumulative_offsets: Vec<f64>,
    pub total: u128,
}

impl Proportions {
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// True when there is no total to apportion
    pub fn is_degenerate(&self) -> bool {
        self.total == 0
    }

    /// Where segment `index` ends: the next segment's offset, or `1.0` for the last one
    pub fn end_offset(&self, index: usize) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        self.cumulative_offsets
            .get(index + 1)
            .copied()
            .unwrap_or(1.0)
    }
}

/// Convert category counts into fractions and cumulative start offsets
pub fn compute_proportions(series: &Series) -> Proportions {
    let total = series.total();
    let mut fractions = Vec::with_capacity(series.len());
    let mut cumulative_offsets = Vec::with_capacity(series.len());

    if total == 0 {
        fractions.resize(series.len(), 0.0);
        cumulative_offsets.resize(series.len(), 0.0);
        return Proportions {
            fractions,
            cumulative_offsets,
            total,
        };
    }

    let denom = total as f64;
    let mut running = 0u128;
    for entry in series {
        cumulative_offsets.push(running as f64 / denom);
        fractions.push(entry.value as f64 / denom);
        running += u128::from(entry.value);
    }

    Proportions {
        fractions,
        cumulative_offsets,
        total,
    }
}
