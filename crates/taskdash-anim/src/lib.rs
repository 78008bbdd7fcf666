//! # taskdash-anim
//!
//! Reveal animation for chart geometry.
//! A run eases a progress value from 0 to 1 over a fixed duration; restarting
//! supersedes whatever run was in flight. Uses Strategy pattern for easing curves.

pub mod driver;
pub mod frames;

pub use driver::*;
pub use frames::*;

/// Default reveal duration in milliseconds
pub const DEFAULT_DURATION_MS: u32 = 1000;

/// Default delay between frames in milliseconds (~60 fps)
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 16;

// ============================================================================
// STRATEGY PATTERN: Easing
// ============================================================================

/// Strategy trait for mapping linear time onto reveal progress
pub trait Easing: Clone {
    /// Eased value for normalized time `t`; callers pass `t` in `[0, 1]`
    fn ease(&self, t: f64) -> f64;
}

/// Built-in easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingCurve {
    /// Fast start, long settle
    #[default]
    OutExpo,
    OutCubic,
    Linear,
}

impl Easing for EasingCurve {
    fn ease(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::OutExpo => 1.0 - 2f64.powf(-10.0 * t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::Linear => t,
        }
    }
}

// ============================================================================
// ANIMATION CONFIGURATION
// ============================================================================

/// Reveal animation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Time from first frame to full reveal (0 = jump straight to complete)
    pub duration_ms: u32,
    pub frame_interval_ms: u32,
    pub easing: EasingCurve,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            easing: EasingCurve::OutExpo,
        }
    }
}

impl AnimationConfig {
    /// Preset by name (`instant`, `relaxed`); anything else is the default
    pub fn from_preset(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "instant" => Self::instant(),
            "relaxed" => Self::relaxed(),
            _ => Self::default(),
        }
    }

    /// No reveal; geometry appears complete on the first frame
    pub fn instant() -> Self {
        Self {
            duration_ms: 0,
            ..Self::default()
        }
    }

    /// Slower reveal for large displays
    pub fn relaxed() -> Self {
        Self {
            duration_ms: 1600,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            easing: EasingCurve::OutCubic,
        }
    }

    /// Normalized time for `elapsed_ms` since the run started
    pub fn normalized_time(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms.max(0.0) / self.duration_ms as f64).min(1.0)
    }
}
