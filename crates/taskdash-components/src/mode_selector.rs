//! Visualization mode picker

use leptos::prelude::*;
use taskdash_core::VisualizationMode;
use taskdash_state::use_chart_state;

/// One button per mode; the active mode is highlighted
#[component]
pub fn ModeSelector() -> impl IntoView {
    let state = use_chart_state();
    let mode = state.mode;

    view! {
        <div class="mode-selector" role="radiogroup">
            {VisualizationMode::ALL
                .into_iter()
                .map(|option| {
                    let state = state.clone();
                    view! {
                        <button
                            class=move || {
                                if mode.get() == option { "mode-option active" } else { "mode-option" }
                            }
                            role="radio"
                            aria-checked=move || (mode.get() == option).to_string()
                            on:click=move |_| state.set_mode(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
