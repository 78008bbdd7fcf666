//! # taskdash-state
//!
//! Reactive state for the task dashboard chart.
//! Uses Leptos signals so the chart redraws whenever the data, the mode,
//! the viewport class or the reveal progress changes.

pub mod chart;

pub use chart::*;

use leptos::prelude::*;
use taskdash_anim::AnimationConfig;
use taskdash_core::{Progress, Series, ViewportClass, VisualizationMode};

// ============================================================================
// RENDER INPUTS
// ============================================================================

/// Render inputs taken in one synchronous pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSnapshot {
    pub series: Series,
    pub mode: VisualizationMode,
    pub viewport: ViewportClass,
    pub progress: Progress,
}

impl ChartSnapshot {
    /// Header line, e.g. "Donut · 10 tasks"
    pub fn summary(&self) -> String {
        let total = self.series.total();
        let noun = if total == 1 { "task" } else { "tasks" };
        format!("{} · {} {}", self.mode.label(), total, noun)
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide chart state context to component tree
pub fn provide_chart_state(animation: AnimationConfig) -> ChartState {
    let state = ChartState::new(animation);
    provide_context(state.clone());
    state
}

/// Use chart state from context
pub fn use_chart_state() -> ChartState {
    expect_context::<ChartState>()
}
