//! Mode dispatcher
//!
//! Six visualization modes share two geometry strategies: arc modes show
//! part-of-whole against the total, linear modes compare magnitudes against
//! the largest category. The renderer picks the strategy, lays the target
//! geometry out for the viewport, then scales only the visible reveal by the
//! current progress.

use crate::{
    ChartConfig, ChartDimensions, ChartLayout,
    arc::compute_arcs,
    chartkit::{BandScale, LinearScale, Scale, area_path, format_count, line_path},
    linear::{Extent, LinearAxis, compute_linear_extents},
    primitives::*,
    proportion::{Proportions, compute_proportions},
};
use taskdash_core::{ColorToken, Progress, Series, ViewportClass, VisualizationMode};

/// Vertical gap between a shape and its value label
const LABEL_GAP: f64 = 6.0;
/// Distance from the baseline to a category label
const CATEGORY_LABEL_OFFSET: f64 = 18.0;

/// Geometry strategy behind a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Arc { ring: bool },
    Linear(LinearAxis),
}

impl From<VisualizationMode> for GeometryKind {
    fn from(mode: VisualizationMode) -> Self {
        match mode {
            VisualizationMode::Ring => Self::Arc { ring: true },
            VisualizationMode::Disc => Self::Arc { ring: false },
            VisualizationMode::BarsVertical => Self::Linear(LinearAxis::Vertical),
            VisualizationMode::BarsHorizontal => Self::Linear(LinearAxis::Horizontal),
            VisualizationMode::Points => Self::Linear(LinearAxis::Points),
            VisualizationMode::Area => Self::Linear(LinearAxis::Area),
        }
    }
}

/// Converts a series into drawable primitives for the active mode
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Render `series` in `mode` at the given reveal progress
    pub fn render(
        &self,
        series: &Series,
        mode: VisualizationMode,
        viewport: ViewportClass,
        progress: Progress,
    ) -> DrawablePrimitives {
        let layout = self.config.layout(viewport);
        let proportions = compute_proportions(series);
        let legend = legend(series, &proportions);

        tracing::trace!(%mode, total = proportions.total, progress = progress.value(), "rendering chart");

        let mut out = DrawablePrimitives {
            mode,
            no_data: false,
            total: proportions.total,
            progress,
            width: layout.canvas_width,
            height: layout.container_height,
            shapes: Vec::new(),
            legend,
        };

        if proportions.is_degenerate() {
            tracing::debug!(%mode, "series total is zero, drawing placeholder");
            out.no_data = true;
            out.shapes.push(self.placeholder(&layout));
            return out;
        }

        match GeometryKind::from(mode) {
            GeometryKind::Arc { ring } => {
                self.render_arcs(&mut out, series, &proportions, &layout, ring)
            }
            GeometryKind::Linear(axis) => {
                let extents = compute_linear_extents(series, series.max_value(), axis);
                let dims = ChartDimensions::new(layout.canvas_width, layout.container_height)
                    .with_margin(self.config.margin);
                match axis {
                    LinearAxis::Vertical => self.render_vertical_bars(&mut out, &extents, &dims, &layout),
                    LinearAxis::Horizontal => self.render_horizontal_bars(&mut out, &extents, &dims, &layout),
                    LinearAxis::Points => self.render_points(&mut out, &extents, &dims, &layout),
                    LinearAxis::Area => self.render_area(&mut out, &extents, &dims),
                }
            }
        }

        out
    }

    fn placeholder(&self, layout: &ChartLayout) -> Primitive {
        let stroke_width = self.config.ring_width(layout);
        Primitive::Placeholder {
            cx: layout.canvas_width / 2.0,
            cy: layout.container_height / 2.0,
            radius: layout.radius() - stroke_width / 2.0,
            stroke_width,
            color: ColorToken::neutral(),
            message: NO_DATA_MESSAGE,
        }
    }

    fn render_arcs(
        &self,
        out: &mut DrawablePrimitives,
        series: &Series,
        proportions: &Proportions,
        layout: &ChartLayout,
        ring: bool,
    ) {
        let radius = layout.radius();
        let ring_width = ring.then(|| self.config.ring_width(layout));
        let progress = out.progress;

        out.width = layout.chart_size;
        out.height = layout.chart_size;
        out.shapes = compute_arcs(series, proportions, radius, ring_width)
            .into_iter()
            .map(|segment| {
                let (start_angle_deg, sweep_angle_deg, dash) = segment.revealed(progress);
                Primitive::Arc(ArcPrimitive {
                    index: segment.index,
                    color: segment.color,
                    cx: radius,
                    cy: radius,
                    radius: segment.stroke_radius,
                    stroke_width: segment.stroke_width,
                    start_angle_deg,
                    sweep_angle_deg,
                    dash,
                })
            })
            .collect();
    }

    fn render_vertical_bars(
        &self,
        out: &mut DrawablePrimitives,
        extents: &[Extent],
        dims: &ChartDimensions,
        layout: &ChartLayout,
    ) {
        let band = category_band(extents.len(), dims.inner_left(), dims.inner_width());
        let baseline = dims.baseline();
        let max_length = (layout.container_height * self.config.bar_length_ratio).min(dims.inner_height());
        let bar_width = band.bandwidth().min(layout.bar_thickness);

        for extent in extents {
            let center = band.scale_center(extent.index);
            let length = out.progress.apply(extent.extent_fraction * max_length);
            let top = baseline - length;

            out.shapes.push(Primitive::Bar(BarPrimitive {
                index: extent.index,
                color: extent.color.clone(),
                rect: Rect::new(center - bar_width / 2.0, top, bar_width, length),
                value: extent.value,
            }));
            out.shapes.push(value_label(extent, center, top - LABEL_GAP, TextAnchor::Middle));
            out.shapes.push(category_label(extent, center, baseline + CATEGORY_LABEL_OFFSET));
        }
    }

    fn render_horizontal_bars(
        &self,
        out: &mut DrawablePrimitives,
        extents: &[Extent],
        dims: &ChartDimensions,
        layout: &ChartLayout,
    ) {
        let rows = BandScale::new(extents.len())
            .range(dims.inner_top(), dims.baseline())
            .padding(0.3, 0.2);
        let left = dims.inner_left();
        let full_width = dims.inner_width();
        let thickness = layout.track_height;

        for extent in extents {
            let row_center = rows.scale_center(extent.index);
            let top = row_center - thickness / 2.0;
            let length = out.progress.apply(extent.extent_fraction * full_width);

            out.shapes.push(Primitive::Track {
                rect: Rect::new(left, top, full_width, thickness),
                color: ColorToken::new(taskdash_core::colors::TRACK),
            });
            out.shapes.push(Primitive::Bar(BarPrimitive {
                index: extent.index,
                color: extent.color.clone(),
                rect: Rect::new(left, top, length, thickness),
                value: extent.value,
            }));
            out.shapes.push(Primitive::Label {
                text: extent.label.clone(),
                x: left,
                y: top - LABEL_GAP,
                anchor: TextAnchor::Start,
                color: ColorToken::neutral(),
            });
            out.shapes.push(value_label(extent, left + full_width, top - LABEL_GAP, TextAnchor::End));
        }
    }

    fn render_points(
        &self,
        out: &mut DrawablePrimitives,
        extents: &[Extent],
        dims: &ChartDimensions,
        layout: &ChartLayout,
    ) {
        self.push_grid(out, dims);
        let band = category_band(extents.len(), dims.inner_left(), dims.inner_width());
        let y_scale = value_scale(dims);
        let opacity = out.progress.value();

        let centers: Vec<(f64, f64)> = extents
            .iter()
            .map(|e| {
                let cx = band.scale_center(e.index);
                let cy = y_scale.scale(out.progress.apply(e.extent_fraction));
                (cx, cy)
            })
            .collect();

        out.shapes.push(Primitive::Guide {
            path: line_path(&centers),
            color: ColorToken::neutral(),
        });

        for (extent, &(cx, cy)) in extents.iter().zip(&centers) {
            out.shapes.push(Primitive::Point(PointPrimitive {
                index: extent.index,
                color: extent.color.clone(),
                cx,
                cy,
                radius: layout.point_radius,
                opacity,
                value: extent.value,
            }));
            out.shapes.push(value_label(
                extent,
                cx,
                cy - layout.point_radius - LABEL_GAP,
                TextAnchor::Middle,
            ));
            out.shapes.push(category_label(extent, cx, dims.baseline() + CATEGORY_LABEL_OFFSET));
        }
    }

    fn render_area(&self, out: &mut DrawablePrimitives, extents: &[Extent], dims: &ChartDimensions) {
        self.push_grid(out, dims);
        let band = category_band(extents.len(), dims.inner_left(), dims.inner_width());
        let y_scale = value_scale(dims);
        let baseline = dims.baseline();
        let width = band.step() * self.config.area_width_ratio;

        for extent in extents {
            let center = band.scale_center(extent.index);
            let left = center - width / 2.0;
            let top = y_scale.scale(out.progress.apply(extent.extent_fraction));

            out.shapes.push(Primitive::Area(AreaPrimitive {
                index: extent.index,
                color: extent.color.clone(),
                rect: Rect::new(left, top, width, baseline - top),
                path: area_path(&[(left, top), (left + width, top)], baseline),
                opacity: self.config.area_opacity,
                value: extent.value,
            }));
            out.shapes.push(value_label(extent, center, top - LABEL_GAP, TextAnchor::Middle));
            out.shapes.push(category_label(extent, center, baseline + CATEGORY_LABEL_OFFSET));
        }
    }

    fn push_grid(&self, out: &mut DrawablePrimitives, dims: &ChartDimensions) {
        let y_scale = value_scale(dims);
        let (x1, x2) = (dims.inner_left(), dims.inner_left() + dims.inner_width());

        for tick in y_scale.ticks(self.config.grid_lines) {
            let y = y_scale.scale(tick);
            out.shapes.push(Primitive::GridLine {
                x1,
                y1: y,
                x2,
                y2: y,
                color: ColorToken::new(taskdash_core::colors::GRID),
            });
        }
    }
}

/// One legend row per entry, with raw counts and share of the total
fn legend(series: &Series, proportions: &Proportions) -> Vec<LegendEntry> {
    series
        .iter()
        .zip(&proportions.fractions)
        .enumerate()
        .map(|(index, (entry, &fraction))| LegendEntry {
            index,
            key: entry.key.clone(),
            color: entry.color.clone(),
            value: entry.value,
            fraction,
        })
        .collect()
}

fn category_band(count: usize, left: f64, width: f64) -> BandScale {
    BandScale::new(count).range(left, left + width).padding(0.2, 0.1)
}

/// Maps an extent fraction onto the plot's vertical axis
fn value_scale(dims: &ChartDimensions) -> LinearScale {
    LinearScale::new()
        .domain(0.0, 1.0)
        .range(dims.baseline(), dims.inner_top())
        .clamp(true)
}

fn value_label(extent: &Extent, x: f64, y: f64, anchor: TextAnchor) -> Primitive {
    Primitive::Label {
        text: format_count(extent.value),
        x,
        y,
        anchor,
        color: ColorToken::neutral(),
    }
}

fn category_label(extent: &Extent, x: f64, y: f64) -> Primitive {
    Primitive::Label {
        text: extent.label.clone(),
        x,
        y,
        anchor: TextAnchor::Middle,
        color: ColorToken::neutral(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdash_core::CategoryDatum;

    const EPS: f64 = 1e-9;

    fn statuses(values: [i64; 3]) -> Series {
        Series::new(vec![
            CategoryDatum::new("Pending", values[0], "purple"),
            CategoryDatum::new("InProgress", values[1], "blue"),
            CategoryDatum::new("Done", values[2], "green"),
        ])
    }

    fn render(values: [i64; 3], mode: VisualizationMode, progress: Progress) -> DrawablePrimitives {
        ChartRenderer::default().render(&statuses(values), mode, ViewportClass::Compact, progress)
    }

    #[test]
    fn test_geometry_dispatch() {
        assert_eq!(GeometryKind::from(VisualizationMode::Ring), GeometryKind::Arc { ring: true });
        assert_eq!(GeometryKind::from(VisualizationMode::Disc), GeometryKind::Arc { ring: false });
        assert_eq!(
            GeometryKind::from(VisualizationMode::BarsHorizontal),
            GeometryKind::Linear(LinearAxis::Horizontal)
        );
    }

    #[test]
    fn test_zero_total_placeholder_in_every_mode() {
        for mode in VisualizationMode::ALL {
            let out = render([0, 0, 0], mode, Progress::COMPLETE);
            assert!(out.no_data, "{mode}");
            assert_eq!(out.shapes.len(), 1);
            assert!(matches!(out.shapes[0], Primitive::Placeholder { .. }));
            assert!(out.is_finite());
            assert_eq!(out.legend.len(), 3);
            assert!(out.legend.iter().all(|e| e.fraction == 0.0));
        }
    }

    #[test]
    fn test_ring_at_full_progress() {
        let out = render([3, 2, 5], VisualizationMode::Ring, Progress::COMPLETE);
        let sweeps: Vec<f64> = out.arcs().map(|a| a.sweep_angle_deg).collect();
        assert_eq!(sweeps.len(), 3);
        for (got, want) in sweeps.iter().zip([108.0, 72.0, 180.0]) {
            assert!((got - want).abs() < EPS);
        }
        assert_eq!(out.width, 160.0);
        assert_eq!(out.total, 10);
        assert!(!out.no_data);
    }

    #[test]
    fn test_disc_strokes_full_radius() {
        let out = render([3, 2, 5], VisualizationMode::Disc, Progress::COMPLETE);
        for arc in out.arcs() {
            assert_eq!(arc.stroke_width, 80.0);
            assert_eq!(arc.radius, 40.0);
        }
    }

    #[test]
    fn test_arc_reveal_is_scaled() {
        let out = render([3, 2, 5], VisualizationMode::Ring, Progress::new(0.5));
        let total: f64 = out.arcs().map(|a| a.sweep_angle_deg).sum();
        assert!((total - 180.0).abs() < EPS);

        let hidden = render([3, 2, 5], VisualizationMode::Ring, Progress::ZERO);
        assert!(hidden.arcs().all(|a| a.sweep_angle_deg == 0.0));
    }

    #[test]
    fn test_vertical_bars_against_max() {
        let out = render([3, 2, 5], VisualizationMode::BarsVertical, Progress::COMPLETE);
        let heights: Vec<f64> = out.bars().map(|b| b.rect.height).collect();
        let tallest = heights[2];
        assert!(tallest > 0.0);
        assert!((heights[0] / tallest - 0.6).abs() < EPS);
        assert!((heights[1] / tallest - 0.4).abs() < EPS);

        let bottoms: Vec<f64> = out.bars().map(|b| b.rect.y + b.rect.height).collect();
        assert!(bottoms.windows(2).all(|w| (w[0] - w[1]).abs() < EPS));
    }

    #[test]
    fn test_horizontal_bars_have_tracks() {
        let out = render([3, 2, 5], VisualizationMode::BarsHorizontal, Progress::COMPLETE);
        let tracks = out
            .shapes
            .iter()
            .filter(|s| matches!(s, Primitive::Track { .. }))
            .count();
        assert_eq!(tracks, 3);

        let widths: Vec<f64> = out.bars().map(|b| b.rect.width).collect();
        assert!((widths[0] / widths[2] - 0.6).abs() < EPS);
    }

    #[test]
    fn test_points_rise_with_progress() {
        let start = render([3, 2, 5], VisualizationMode::Points, Progress::ZERO);
        let end = render([3, 2, 5], VisualizationMode::Points, Progress::COMPLETE);

        let baseline: Vec<f64> = start.points().map(|p| p.cy).collect();
        assert!(baseline.windows(2).all(|w| w[0] == w[1]));
        assert!(start.points().all(|p| p.opacity == 0.0));

        let raised: Vec<f64> = end.points().map(|p| p.cy).collect();
        assert!(raised[2] < raised[0] && raised[0] < raised[1]);
        assert!(end.shapes.iter().any(|s| matches!(s, Primitive::Guide { .. })));
    }

    #[test]
    fn test_area_columns_fill_from_baseline() {
        let out = render([3, 2, 5], VisualizationMode::Area, Progress::COMPLETE);
        let areas: Vec<&AreaPrimitive> = out.areas().collect();
        assert_eq!(areas.len(), 3);
        let tallest = areas[2].rect.height;
        assert!((areas[0].rect.height / tallest - 0.6).abs() < EPS);
        assert!(areas.iter().all(|a| a.path.ends_with('Z')));

        let grid = out
            .shapes
            .iter()
            .filter(|s| matches!(s, Primitive::GridLine { .. }))
            .count();
        assert_eq!(grid, 3);
    }

    #[test]
    fn test_all_zero_but_one_stays_finite() {
        for mode in VisualizationMode::ALL {
            let out = render([0, 0, 4], mode, Progress::new(0.3));
            assert!(out.is_finite(), "{mode}");
            assert!(!out.no_data);
        }
    }

    #[test]
    fn test_legend_carries_raw_values() {
        let out = render([3, 2, 5], VisualizationMode::Area, Progress::ZERO);
        let values: Vec<u64> = out.legend.iter().map(|e| e.value).collect();
        let keys: Vec<&str> = out.legend.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(values, [3, 2, 5]);
        assert_eq!(keys, ["Pending", "InProgress", "Done"]);
        assert_eq!(out.legend[2].fraction, 0.5);
    }
}
