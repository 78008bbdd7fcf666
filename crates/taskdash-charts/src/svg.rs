//! SVG drawing backend
//!
//! Draws whatever the renderer produced; no geometry is computed here.
//! Arcs use the stroke-dash realization: a full circle per segment, stroked
//! with one dash and rotated to the segment's start angle.

use crate::primitives::{DrawablePrimitives, Primitive};
use leptos::prelude::*;
use taskdash_core::colors;

const FONT_FAMILY: &str = "system-ui, sans-serif";

/// Chart component driven by a stream of rendered frames
#[component]
pub fn DynamicChart(#[prop(into)] primitives: Signal<DrawablePrimitives>) -> impl IntoView {
    view! {
        <svg
            class="dynamic-chart"
            viewBox=move || primitives.get().viewbox()
            preserveAspectRatio="xMidYMid meet"
            style="width: 100%; height: 100%;"
        >
            {move || {
                primitives
                    .get()
                    .shapes
                    .into_iter()
                    .map(draw_primitive)
                    .collect_view()
            }}

            // Total in the middle of ring and disc charts
            {move || {
                let frame = primitives.get();
                (frame.mode.is_arc() && !frame.no_data).then(|| {
                    let cx = frame.width / 2.0;
                    let cy = frame.height / 2.0;
                    let size = frame.width * 0.18;
                    view! {
                        <g class="chart-total" fill=colors::NEUTRAL font-family=FONT_FAMILY>
                            <text x=cx y=cy text-anchor="middle" font-size=size font-weight="bold">
                                {frame.total.to_string()}
                            </text>
                            <text
                                x=cx
                                y={cy + size * 0.7}
                                text-anchor="middle"
                                font-size="10"
                                font-weight="bold"
                                opacity="0.5"
                            >
                                "TOTAL"
                            </text>
                        </g>
                    }
                })
            }}
        </svg>
    }
}

fn draw_primitive(shape: Primitive) -> impl IntoView {
    match shape {
        Primitive::Placeholder {
            cx,
            cy,
            radius,
            stroke_width,
            color,
            message,
        } => view! {
            <g class="chart-placeholder">
                <circle
                    cx=cx
                    cy=cy
                    r=radius
                    fill="none"
                    stroke=color.0
                    stroke-width=stroke_width
                    stroke-opacity="0.15"
                />
                <text
                    x=cx
                    y=cy
                    dy="0.32em"
                    text-anchor="middle"
                    fill=colors::NEUTRAL
                    opacity="0.5"
                    font-size="12"
                    font-family=FONT_FAMILY
                >
                    {message}
                </text>
            </g>
        }
        .into_any(),
        Primitive::Arc(arc) => view! {
            <circle
                class="chart-arc"
                cx=arc.cx
                cy=arc.cy
                r=arc.radius
                fill="none"
                stroke=arc.color.0
                stroke-width=arc.stroke_width
                stroke-dasharray=arc.dash.dasharray()
                stroke-dashoffset=arc.dash.dash_offset
                transform=format!("rotate({:.3}, {}, {})", arc.dash.rotation_deg, arc.cx, arc.cy)
            />
        }
        .into_any(),
        Primitive::Bar(bar) => view! {
            <rect
                class="chart-bar"
                x=bar.rect.x
                y=bar.rect.y
                width=bar.rect.width
                height=bar.rect.height
                fill=bar.color.0
                rx="6"
            />
        }
        .into_any(),
        Primitive::Track { rect, color } => view! {
            <rect
                class="chart-track"
                x=rect.x
                y=rect.y
                width=rect.width
                height=rect.height
                fill=color.0
                rx={rect.height / 2.0}
            />
        }
        .into_any(),
        Primitive::Point(point) => view! {
            <circle
                class="chart-point"
                cx=point.cx
                cy=point.cy
                r=point.radius
                fill=point.color.0
                opacity=point.opacity
                stroke="white"
                stroke-width="3"
            />
        }
        .into_any(),
        Primitive::Area(area) => view! {
            <path class="chart-area" d=area.path fill=area.color.0 opacity=area.opacity />
        }
        .into_any(),
        Primitive::Guide { path, color } => view! {
            <path
                class="chart-guide"
                d=path
                fill="none"
                stroke=color.0
                stroke-width="1.5"
                stroke-opacity="0.3"
                stroke-dasharray="4,4"
            />
        }
        .into_any(),
        Primitive::GridLine { x1, y1, x2, y2, color } => view! {
            <line x1=x1 y1=y1 x2=x2 y2=y2 stroke=color.0 stroke-width="1" stroke-dasharray="2,2" />
        }
        .into_any(),
        Primitive::Label {
            text,
            x,
            y,
            anchor,
            color,
        } => view! {
            <text
                x=x
                y=y
                text-anchor=anchor.as_svg()
                fill=color.0
                font-size="11"
                font-weight="600"
                font-family=FONT_FAMILY
            >
                {text}
            </text>
        }
        .into_any(),
    }
}
