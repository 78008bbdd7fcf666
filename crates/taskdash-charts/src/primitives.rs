//! Backend-agnostic drawable output
//!
//! Coordinates are in canvas pixels with the origin at the top-left corner.

use crate::arc::StrokeDash;
use taskdash_core::{ColorToken, Progress, VisualizationMode};

/// Message shown when there is nothing to draw
pub const NO_DATA_MESSAGE: &str = "No data to display";

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    fn is_finite(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Stroked arc, already scaled by the reveal progress
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPrimitive {
    pub index: usize,
    pub color: ColorToken,
    pub cx: f64,
    pub cy: f64,
    /// Radius of the stroke centerline
    pub radius: f64,
    pub stroke_width: f64,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub dash: StrokeDash,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarPrimitive {
    pub index: usize,
    pub color: ColorToken,
    pub rect: Rect,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointPrimitive {
    pub index: usize,
    pub color: ColorToken,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaPrimitive {
    pub index: usize,
    pub color: ColorToken,
    pub rect: Rect,
    /// Closed SVG path from the baseline up to the revealed extent
    pub path: String,
    pub opacity: f64,
    pub value: u64,
}

/// One drawable shape
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Neutral full ring drawn in place of an empty chart
    Placeholder {
        cx: f64,
        cy: f64,
        radius: f64,
        stroke_width: f64,
        color: ColorToken,
        message: &'static str,
    },
    Arc(ArcPrimitive),
    Bar(BarPrimitive),
    /// Background behind a horizontal bar
    Track { rect: Rect, color: ColorToken },
    Point(PointPrimitive),
    Area(AreaPrimitive),
    /// Polyline connecting the points
    Guide { path: String, color: ColorToken },
    GridLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: ColorToken,
    },
    Label {
        text: String,
        x: f64,
        y: f64,
        anchor: TextAnchor,
        color: ColorToken,
    },
}

impl Primitive {
    /// True when every coordinate is finite
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Placeholder {
                cx,
                cy,
                radius,
                stroke_width,
                ..
            } => [*cx, *cy, *radius, *stroke_width].iter().all(|v| v.is_finite()),
            Self::Arc(arc) => [
                arc.cx,
                arc.cy,
                arc.radius,
                arc.stroke_width,
                arc.start_angle_deg,
                arc.sweep_angle_deg,
                arc.dash.dash_length,
                arc.dash.gap_length,
                arc.dash.rotation_deg,
            ]
            .iter()
            .all(|v| v.is_finite()),
            Self::Bar(bar) => bar.rect.is_finite(),
            Self::Track { rect, .. } => rect.is_finite(),
            Self::Point(point) => [point.cx, point.cy, point.radius, point.opacity]
                .iter()
                .all(|v| v.is_finite()),
            Self::Area(area) => area.rect.is_finite() && !area.path.contains("NaN"),
            Self::Guide { path, .. } => !path.contains("NaN") && !path.contains("inf"),
            Self::GridLine { x1, y1, x2, y2, .. } => {
                [*x1, *y1, *x2, *y2].iter().all(|v| v.is_finite())
            }
            Self::Label { x, y, .. } => x.is_finite() && y.is_finite(),
        }
    }
}

/// Legend row, one per series entry in series order
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub index: usize,
    pub key: String,
    pub color: ColorToken,
    /// Raw count, so the display can show exact numbers
    pub value: u64,
    /// Share of the total; zero when the total is zero
    pub fraction: f64,
}

/// Everything a drawing backend needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawablePrimitives {
    pub mode: VisualizationMode,
    /// Set when the total is zero and only the placeholder is emitted
    pub no_data: bool,
    pub total: u128,
    pub progress: Progress,
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Primitive>,
    pub legend: Vec<LegendEntry>,
}

impl DrawablePrimitives {
    /// SVG `viewBox` covering the canvas
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// True when no shape or legend entry carries a NaN or infinite number
    pub fn is_finite(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.shapes.iter().all(Primitive::is_finite)
            && self.legend.iter().all(|e| e.fraction.is_finite())
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.shapes.iter().filter_map(|s| match s {
            Primitive::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn bars(&self) -> impl Iterator<Item = &BarPrimitive> {
        self.shapes.iter().filter_map(|s| match s {
            Primitive::Bar(bar) => Some(bar),
            _ => None,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = &PointPrimitive> {
        self.shapes.iter().filter_map(|s| match s {
            Primitive::Point(point) => Some(point),
            _ => None,
        })
    }

    pub fn areas(&self) -> impl Iterator<Item = &AreaPrimitive> {
        self.shapes.iter().filter_map(|s| match s {
            Primitive::Area(area) => Some(area),
            _ => None,
        })
    }
}
