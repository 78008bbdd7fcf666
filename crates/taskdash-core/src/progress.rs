//! Animation reveal progress

use serde::{Deserialize, Serialize};

/// Normalized reveal value in `[0, 1]`.
///
/// Only scales how much of the target geometry is shown; it never feeds
/// back into proportions.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64")]
pub struct Progress(f64);

impl Progress {
    pub const ZERO: Progress = Progress(0.0);
    pub const COMPLETE: Progress = Progress(1.0);

    /// Clamp into `[0, 1]`; NaN collapses to zero
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 >= 1.0
    }

    /// Portion of `target` revealed at this progress
    pub fn apply(&self, target: f64) -> f64 {
        target * self.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        assert_eq!(Progress::new(-0.5), Progress::ZERO);
        assert_eq!(Progress::new(1.7), Progress::COMPLETE);
        assert_eq!(Progress::new(f64::NAN), Progress::ZERO);
        assert_eq!(Progress::new(0.25).value(), 0.25);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Progress::new(0.5).apply(180.0), 90.0);
        assert_eq!(Progress::ZERO.apply(42.0), 0.0);
        assert!(Progress::COMPLETE.is_complete());
    }
}
