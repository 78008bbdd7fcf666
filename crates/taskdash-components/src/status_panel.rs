//! Task-status chart panel

use crate::{ChartLegend, ModeSelector};
use leptos::prelude::*;
use taskdash_charts::{ChartConfig, ChartRenderer, DynamicChart};
use taskdash_state::use_chart_state;

#[derive(Debug, Clone)]
pub struct StatusPanelConfig {
    pub title: String,
    pub show_selector: bool,
    pub show_percent: bool,
    pub chart: ChartConfig,
}

impl Default for StatusPanelConfig {
    fn default() -> Self {
        Self {
            title: "Task Status".to_string(),
            show_selector: true,
            show_percent: true,
            chart: ChartConfig::default(),
        }
    }
}

impl StatusPanelConfig {
    /// Chart and legend only
    pub fn compact() -> Self {
        Self {
            show_selector: false,
            show_percent: false,
            ..Self::default()
        }
    }
}

/// Title, mode and total, chart and legend for the shared chart state
#[component]
pub fn StatusChartPanel(#[prop(optional)] config: Option<StatusPanelConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = use_chart_state();
    let renderer = ChartRenderer::new(config.chart);

    let snapshot = Memo::new(move |_| state.snapshot());
    let primitives = Memo::new(move |_| {
        snapshot.with(|s| renderer.render(&s.series, s.mode, s.viewport, s.progress))
    });
    let legend = Signal::derive(move || primitives.get().legend);
    let viewport = Signal::derive(move || snapshot.with(|s| s.viewport));

    view! {
        <div class=move || format!("panel status-chart {}", viewport.get().label())>
            <div class="panel-header">
                <span class="panel-title">{config.title}</span>
                <span class="panel-subtitle">{move || snapshot.with(|s| s.summary())}</span>
            </div>

            <div class="panel-content">
                <div class="chart-area">
                    <DynamicChart primitives=primitives />
                </div>
                <ChartLegend entries=legend show_percent=config.show_percent />
            </div>

            {config.show_selector.then(|| view! {
                <div class="panel-footer">
                    <ModeSelector />
                </div>
            })}
        </div>
    }
}
