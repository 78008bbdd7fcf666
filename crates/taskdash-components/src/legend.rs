//! Chart legend component

use leptos::prelude::*;
use taskdash_charts::{LegendEntry, format_count, format_percent};

#[component]
pub fn ChartLegend(
    #[prop(into)] entries: Signal<Vec<LegendEntry>>,
    /// Show each category's share of the total
    #[prop(optional)]
    show_percent: bool,
) -> impl IntoView {
    view! {
        <ul class="chart-legend">
            <For
                each=move || entries.get()
                key=|entry| (entry.index, entry.key.clone(), entry.value)
                children=move |entry| {
                    let percent = show_percent.then(|| format_percent(entry.fraction));
                    view! {
                        <li class="legend-row">
                            <span
                                class="legend-swatch"
                                style=format!("background-color: {}", entry.color)
                            ></span>
                            <span class="legend-label">{entry.key}</span>
                            <span class="legend-value">{format_count(entry.value)}</span>
                            {percent.map(|p| view! { <span class="legend-percent">{p}</span> })}
                        </li>
                    }
                }
            />
        </ul>
    }
}
