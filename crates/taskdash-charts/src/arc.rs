//! Ring and disc geometry
//!
//! Segments are drawn as stroked circles. A segment's arc is carried both as
//! direct angles and as the equivalent stroke-dash parameters; the two must
//! agree to within floating rounding.
//!
//! Angles are in degrees, sweep clockwise, with 0° pointing right (SVG
//! convention). The constant -90° rotation puts the first segment at 12 o'clock.

use crate::proportion::Proportions;
use std::f64::consts::PI;
use taskdash_core::{ColorToken, Progress, Series};

/// Rotation applied to every segment so the sweep starts at the top
pub const START_ROTATION_DEG: f64 = -90.0;

/// Stroke-dash realization of one arc on a circle of known circumference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDash {
    pub circumference: f64,
    pub dash_length: f64,
    pub gap_length: f64,
    pub dash_offset: f64,
    /// Rotation of the stroked circle, i.e. where the dash begins
    pub rotation_deg: f64,
}

impl StrokeDash {
    fn new(circumference: f64, fraction: f64, rotation_deg: f64) -> Self {
        let dash_length = circumference * fraction;
        Self {
            circumference,
            dash_length,
            gap_length: circumference - dash_length,
            dash_offset: 0.0,
            rotation_deg,
        }
    }

    /// Angle covered by the dash
    pub fn sweep_deg(&self) -> f64 {
        if self.circumference <= 0.0 {
            return 0.0;
        }
        self.dash_length / self.circumference * 360.0
    }

    /// SVG `stroke-dasharray` value
    pub fn dasharray(&self) -> String {
        format!("{:.3} {:.3}", self.dash_length, self.gap_length)
    }
}

/// One visible arc segment
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    /// Position of the source entry in the series
    pub index: usize,
    pub key: String,
    pub color: ColorToken,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    /// Radius of the stroke centerline
    pub stroke_radius: f64,
    pub stroke_width: f64,
    pub dash: StrokeDash,
}

impl ArcSegment {
    pub fn end_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg
    }

    /// Start, sweep and dash at a partial reveal.
    ///
    /// Both the start (measured from 12 o'clock) and the sweep scale with
    /// `progress`, so segments stay edge-to-edge while the circle grows.
    pub fn revealed(&self, progress: Progress) -> (f64, f64, StrokeDash) {
        let start = START_ROTATION_DEG + progress.apply(self.start_angle_deg - START_ROTATION_DEG);
        let sweep = progress.apply(self.sweep_angle_deg);
        let dash = StrokeDash::new(self.dash.circumference, sweep / 360.0, start);
        (start, sweep, dash)
    }
}

/// Stroke placement shared by every segment of one chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFrame {
    pub radius: f64,
    pub stroke_width: f64,
    pub stroke_radius: f64,
    pub circumference: f64,
}

impl ArcFrame {
    /// `ring_width` of `None` means a solid disc: the stroke spans the whole radius
    pub fn new(radius: f64, ring_width: Option<f64>) -> Self {
        let radius = radius.max(0.0);
        let stroke_width = ring_width.unwrap_or(radius).clamp(0.0, radius);
        let stroke_radius = radius - stroke_width / 2.0;
        Self {
            radius,
            stroke_width,
            stroke_radius,
            circumference: 2.0 * PI * stroke_radius,
        }
    }
}

/// Lay out ring/disc segments in series order.
///
/// Zero-value entries are dropped, and a zero total yields no segments; the
/// caller draws a placeholder instead.
pub fn compute_arcs(
    series: &Series,
    proportions: &Proportions,
    radius: f64,
    ring_width: Option<f64>,
) -> Vec<ArcSegment> {
    if proportions.is_degenerate() {
        return Vec::new();
    }

    let frame = ArcFrame::new(radius, ring_width);

    series
        .iter()
        .zip(proportions.fractions.iter().zip(&proportions.cumulative_offsets))
        .enumerate()
        .filter(|(_, (_, (fraction, _)))| **fraction > 0.0)
        .map(|(index, (entry, (_, &offset)))| {
            let end = proportions.end_offset(index);
            let start_angle_deg = offset * 360.0 + START_ROTATION_DEG;
            let sweep_fraction = end - offset;

            ArcSegment {
                index,
                key: entry.key.clone(),
                color: entry.color.clone(),
                start_angle_deg,
                sweep_angle_deg: sweep_fraction * 360.0,
                stroke_radius: frame.stroke_radius,
                stroke_width: frame.stroke_width,
                dash: StrokeDash::new(frame.circumference, sweep_fraction, start_angle_deg),
            }
        })
        .collect()
}
