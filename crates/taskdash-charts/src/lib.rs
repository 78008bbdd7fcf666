//! # taskdash-charts
//!
//! Proportional chart rendering for the task dashboard.
//! Turns a small series of category counts into exact draw primitives for
//! six visualization modes, and ships a Leptos SVG backend that draws them.
//!
//! ## Architecture
//!
//! - Pure geometry (`proportion`, `arc`, `linear`) never touches animation or theme state
//! - `renderer` dispatches on the mode and applies the current reveal progress
//! - `svg` is one possible drawing backend for the resulting primitives
//!
//! ## Modules
//!
//! - `chartkit` - Scales, path builders, formatters
//! - `proportion` - Fractions and cumulative offsets of the total
//! - `arc` - Ring and disc segment geometry
//! - `linear` - Bar, point and area extents
//! - `primitives` - Backend-agnostic drawable output
//! - `renderer` - Mode dispatcher
//! - `svg` - Leptos SVG component

pub mod arc;
pub mod chartkit;
pub mod linear;
pub mod primitives;
pub mod proportion;
pub mod renderer;
pub mod svg;

pub use arc::*;
pub use chartkit::*;
pub use linear::*;
pub use primitives::*;
pub use proportion::*;
pub use renderer::*;
pub use svg::*;

use taskdash_core::ViewportClass;

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Room for value labels above and category labels below the plot
    pub const fn labelled() -> Self {
        Self::new(28.0, 16.0, 28.0, 16.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::labelled()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Left edge of the plot area
    pub fn inner_left(&self) -> f64 {
        self.margin.left
    }

    /// Top edge of the plot area
    pub fn inner_top(&self) -> f64 {
        self.margin.top
    }

    /// Y coordinate of the plot baseline
    pub fn baseline(&self) -> f64 {
        self.margin.top + self.inner_height()
    }
}

/// Pixel sizes for one viewport class.
///
/// Sizing snaps between two fixed layouts rather than scaling continuously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Diameter of the ring/disc
    pub chart_size: f64,
    pub container_height: f64,
    /// Width of the canvas used by linear modes
    pub canvas_width: f64,
    /// Upper bound for a vertical bar's width
    pub bar_thickness: f64,
    /// Height of a horizontal bar and its track
    pub track_height: f64,
    pub point_radius: f64,
}

impl ChartLayout {
    pub const fn compact() -> Self {
        Self {
            chart_size: 160.0,
            container_height: 240.0,
            canvas_width: 320.0,
            bar_thickness: 45.0,
            track_height: 14.0,
            point_radius: 9.0,
        }
    }

    pub const fn regular() -> Self {
        Self {
            chart_size: 220.0,
            container_height: 300.0,
            canvas_width: 560.0,
            bar_thickness: 60.0,
            track_height: 14.0,
            point_radius: 9.0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.chart_size / 2.0
    }
}

/// Renderer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Ring stroke width as a share of the chart diameter
    pub ring_width_ratio: f64,
    /// Longest vertical bar as a share of the container height
    pub bar_length_ratio: f64,
    /// Area column width as a share of its category slot
    pub area_width_ratio: f64,
    pub area_opacity: f64,
    /// Number of horizontal grid lines in point and area modes
    pub grid_lines: usize,
    pub margin: ChartMargin,
    pub compact: ChartLayout,
    pub regular: ChartLayout,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ring_width_ratio: 0.22,
            bar_length_ratio: 0.6,
            area_width_ratio: 0.85,
            area_opacity: 0.8,
            grid_lines: 3,
            margin: ChartMargin::labelled(),
            compact: ChartLayout::compact(),
            regular: ChartLayout::regular(),
        }
    }
}

impl ChartConfig {
    /// Layout for the given viewport class
    pub fn layout(&self, viewport: ViewportClass) -> ChartLayout {
        match viewport {
            ViewportClass::Compact => self.compact,
            ViewportClass::Regular => self.regular,
        }
    }

    /// Ring stroke width for a layout
    pub fn ring_width(&self, layout: &ChartLayout) -> f64 {
        layout.chart_size * self.ring_width_ratio
    }
}
