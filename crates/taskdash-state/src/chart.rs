//! Reactive chart state with animation restarts

use crate::ChartSnapshot;
use leptos::prelude::*;
use taskdash_anim::{AnimationConfig, AnimationDriver, AnimationRun, now_ms, spawn_run};
use taskdash_core::{Progress, Series, ViewportClass, VisualizationMode};

/// Starts a run that feeds its frames into the progress signal
pub type RunSpawner = fn(AnimationRun, u32, RwSignal<Progress>);

/// Drive the run on the browser event loop
fn spawn_on_timer(run: AnimationRun, interval_ms: u32, progress: RwSignal<Progress>) {
    spawn_run(run, interval_ms, move |p| progress.set(p));
}

/// Inputs of the chart plus the current reveal progress
#[derive(Clone)]
pub struct ChartState {
    pub series: RwSignal<Series>,
    pub mode: RwSignal<VisualizationMode>,
    pub viewport: RwSignal<ViewportClass>,
    /// Written only by the active animation run
    pub progress: RwSignal<Progress>,
    driver: AnimationDriver,
    spawner: RunSpawner,
}

impl ChartState {
    pub fn new(config: AnimationConfig) -> Self {
        Self::with_spawner(config, spawn_on_timer)
    }

    /// State whose runs are started by `spawner` instead of browser timers
    pub fn with_spawner(config: AnimationConfig, spawner: RunSpawner) -> Self {
        Self {
            series: RwSignal::new(Series::default()),
            mode: RwSignal::new(VisualizationMode::default()),
            viewport: RwSignal::new(ViewportClass::default()),
            progress: RwSignal::new(Progress::ZERO),
            driver: AnimationDriver::new(config),
            spawner,
        }
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Replace the data; a new series always replays the reveal
    pub fn set_series(&self, series: Series) {
        tracing::debug!("Series updated: {} categories, total {}", series.len(), series.total());
        // Progress drops first so the new series is never paired with the old reveal
        self.progress.set(Progress::ZERO);
        self.series.set(series);
        self.restart_animation();
    }

    /// Switch mode; replays the reveal only when the mode actually changes
    pub fn set_mode(&self, mode: VisualizationMode) {
        if self.mode.get_untracked() == mode {
            return;
        }
        tracing::debug!("Visualization mode: {}", mode);
        self.progress.set(Progress::ZERO);
        self.mode.set(mode);
        self.restart_animation();
    }

    /// Switch mode from a settings value; unknown values fall back to the default
    pub fn set_mode_setting(&self, setting: &str) {
        self.set_mode(resolve_mode_setting(setting));
    }

    /// Reclassify the viewport; geometry snaps without replaying the reveal
    pub fn set_viewport_width(&self, width_px: f64) {
        let viewport = ViewportClass::from_width(width_px);
        if self.viewport.get_untracked() != viewport {
            tracing::debug!("Viewport class: {}", viewport.label());
            self.viewport.set(viewport);
        }
    }

    // ========================================================================
    // Animation
    // ========================================================================

    /// Supersede any reveal in flight and start over from zero
    pub fn restart_animation(&self) {
        let run = self.driver.restart(now_ms());
        self.progress.set(Progress::ZERO);
        (self.spawner)(run, self.driver.config().frame_interval_ms, self.progress);
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// All render inputs read together, tracked
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            series: self.series.get(),
            mode: self.mode.get(),
            viewport: self.viewport.get(),
            progress: self.progress.get(),
        }
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

/// Mode for a settings value, logging and defaulting when it is unknown
pub fn resolve_mode_setting(setting: &str) -> VisualizationMode {
    match VisualizationMode::from_setting(setting) {
        Ok(mode) => mode,
        Err(e) => {
            let fallback = VisualizationMode::default();
            tracing::warn!("{}; using {}", e, fallback);
            fallback
        }
    }
}
