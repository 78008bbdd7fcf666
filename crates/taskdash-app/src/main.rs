//! Task dashboard entry point

use leptos::prelude::*;
use taskdash_anim::AnimationConfig;
use taskdash_components::{StatusChartPanel, status_series};
use taskdash_state::provide_chart_state;
use wasm_bindgen::JsValue;

/// Demo status counts cycled by the refresh button
const DEMO_COUNTS: [[(&str, i64); 3]; 3] = [
    [("Pending", 3), ("In Progress", 2), ("Done", 5)],
    [("Pending", 1), ("In Progress", 4), ("Done", 9)],
    [("Pending", 0), ("In Progress", 0), ("Done", 0)],
];

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    tracing::info!("Starting task dashboard");
    mount_to_body(App);
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    tracing_wasm::set_as_global_default();
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    tracing_subscriber::fmt().with_target(false).init();
}

fn width_px(value: Result<JsValue, JsValue>) -> Option<f64> {
    value.ok().and_then(|v| v.as_f64())
}

/// Value of query parameter `name`, if present
fn query_param(name: &str) -> Option<String> {
    let search = window().location().search().ok()?;
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[component]
fn App() -> impl IntoView {
    let animation = query_param("animation")
        .map(|preset| AnimationConfig::from_preset(&preset))
        .unwrap_or_default();
    let state = provide_chart_state(animation);

    if let Some(width) = width_px(window().inner_width()) {
        state.set_viewport_width(width);
    }
    if let Some(setting) = query_param("mode") {
        state.set_mode_setting(&setting);
    }

    let resize_state = state.clone();
    let _resize = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = width_px(window().inner_width()) {
            resize_state.set_viewport_width(width);
        }
    });

    let demo = RwSignal::new(0usize);
    state.set_series(status_series(&DEMO_COUNTS[0]));

    let refresh_state = state.clone();
    let refresh = move |_| {
        let next = (demo.get_untracked() + 1) % DEMO_COUNTS.len();
        demo.set(next);
        refresh_state.set_series(status_series(&DEMO_COUNTS[next]));
    };

    view! {
        <main class="task-dashboard">
            <header class="dash-header">
                <h1>"My Tasks"</h1>
                <button class="refresh" on:click=refresh>"Refresh"</button>
            </header>
            <StatusChartPanel />
        </main>
    }
}
