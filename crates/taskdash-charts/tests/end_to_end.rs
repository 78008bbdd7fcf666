use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use taskdash_charts::{
    ChartConfig, ChartRenderer, DrawablePrimitives, NO_DATA_MESSAGE, Primitive, compute_proportions,
};
use taskdash_core::{CategoryDatum, Progress, Series, ViewportClass, VisualizationMode};

const EPS: f64 = 1e-9;

fn status_counts(values: &[i64]) -> Series {
    let keys = ["Pending", "In Progress", "Done"];
    values
        .iter()
        .zip(keys)
        .map(|(&v, key)| CategoryDatum::new(key, v, format!("color-{key}")))
        .collect()
}

fn render(series: &Series, mode: VisualizationMode, progress: Progress) -> DrawablePrimitives {
    ChartRenderer::default().render(series, mode, ViewportClass::Compact, progress)
}

fn assert_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len(), "{got:?} vs {want:?}");
    for (g, w) in got.iter().zip(want) {
        assert!((g - w).abs() < EPS, "{got:?} vs {want:?}");
    }
}

#[test]
fn test_ring_scenario() {
    let frame = render(&status_counts(&[3, 2, 5]), VisualizationMode::Ring, Progress::COMPLETE);

    let sweeps: Vec<f64> = frame.arcs().map(|a| a.sweep_angle_deg).collect();
    let starts: Vec<f64> = frame.arcs().map(|a| a.start_angle_deg).collect();
    assert_close(&sweeps, &[108.0, 72.0, 180.0]);
    assert_close(&starts, &[-90.0, 18.0, 90.0]);

    assert_eq!(frame.total, 10);
    assert!(!frame.no_data);
    let shares: Vec<f64> = frame.legend.iter().map(|e| e.fraction).collect();
    assert_close(&shares, &[0.3, 0.2, 0.5]);
}

#[test]
fn test_vertical_bar_scenario() {
    let frame = render(
        &status_counts(&[3, 2, 5]),
        VisualizationMode::BarsVertical,
        Progress::COMPLETE,
    );

    let heights: Vec<f64> = frame.bars().map(|b| b.rect.height).collect();
    let tallest = heights.iter().cloned().fold(0.0, f64::max);
    let relative: Vec<f64> = heights.iter().map(|h| h / tallest).collect();
    assert_close(&relative, &[0.6, 0.4, 1.0]);

    let baseline = frame.bars().map(|b| b.rect.y + b.rect.height).collect::<Vec<_>>();
    assert!(baseline.windows(2).all(|w| (w[0] - w[1]).abs() < EPS));
}

#[test]
fn test_reveal_grows_toward_target() {
    let series = status_counts(&[3, 2, 5]);
    let mut last_total = 0.0;

    for step in 0..=10 {
        let frame = render(&series, VisualizationMode::Ring, Progress::new(step as f64 / 10.0));
        let swept: f64 = frame.arcs().map(|a| a.sweep_angle_deg).sum();
        assert!(swept + EPS >= last_total);
        last_total = swept;
    }
    assert!((last_total - 360.0).abs() < EPS);
}

#[test]
fn test_zero_total_is_safe_in_every_mode() {
    let series = status_counts(&[0, 0, 0]);

    for mode in VisualizationMode::ALL {
        for progress in [Progress::ZERO, Progress::new(0.5), Progress::COMPLETE] {
            let frame = render(&series, mode, progress);
            assert!(frame.no_data, "{mode} should report no data");
            assert!(frame.is_finite(), "{mode} produced non-finite geometry");
            assert_eq!(frame.shapes.len(), 1);
            assert!(matches!(
                &frame.shapes[0],
                Primitive::Placeholder { message, .. } if *message == NO_DATA_MESSAGE
            ));
            assert!(frame.legend.iter().all(|e| e.fraction == 0.0));
        }
    }
}

#[test]
fn test_empty_series_is_safe() {
    let frame = render(&Series::default(), VisualizationMode::Area, Progress::COMPLETE);
    assert!(frame.no_data);
    assert!(frame.legend.is_empty());
}

#[test]
fn test_order_follows_input_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut entries: Vec<CategoryDatum> = (0..8)
        .map(|i| CategoryDatum::new(format!("cat{i}"), (i * 3 + 1) as i64, format!("c{i}")))
        .collect();

    for _ in 0..5 {
        entries.shuffle(&mut rng);
        let series = Series::new(entries.clone());
        let expected: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();

        for mode in VisualizationMode::ALL {
            let frame = render(&series, mode, Progress::COMPLETE);
            let legend: Vec<&str> = frame.legend.iter().map(|e| e.key.as_str()).collect();
            assert_eq!(legend, expected, "legend order in {mode}");
        }

        let ring = render(&series, VisualizationMode::Ring, Progress::COMPLETE);
        let indices: Vec<usize> = ring.arcs().map(|a| a.index).collect();
        assert_eq!(indices, (0..entries.len()).collect::<Vec<_>>());
        let colors: Vec<String> = ring.arcs().map(|a| a.color.to_string()).collect();
        let expected_colors: Vec<String> = entries.iter().map(|e| e.color.to_string()).collect();
        assert_eq!(colors, expected_colors);
    }
}

fn relative_to_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0, f64::max);
    values.iter().map(|v| v / max).collect()
}

#[test]
fn test_proportions_shared_across_modes() {
    let series = status_counts(&[4, 1, 6]);
    let shares = compute_proportions(&series).fractions;
    let by_max = [4.0 / 6.0, 1.0 / 6.0, 1.0];

    for mode in VisualizationMode::ALL {
        let frame = render(&series, mode, Progress::COMPLETE);
        let legend: Vec<f64> = frame.legend.iter().map(|e| e.fraction).collect();
        assert_eq!(legend, shares, "legend shares in {mode}");
        assert_eq!(frame.total, 11);
    }

    // arc modes sweep by share of the total
    for mode in [VisualizationMode::Ring, VisualizationMode::Disc] {
        let frame = render(&series, mode, Progress::COMPLETE);
        let swept: Vec<f64> = frame.arcs().map(|a| a.sweep_angle_deg / 360.0).collect();
        assert_close(&swept, &shares);
    }

    // linear modes scale by the largest category
    let vertical = render(&series, VisualizationMode::BarsVertical, Progress::COMPLETE);
    let heights: Vec<f64> = vertical.bars().map(|b| b.rect.height).collect();
    assert_close(&relative_to_max(&heights), &by_max);

    let horizontal = render(&series, VisualizationMode::BarsHorizontal, Progress::COMPLETE);
    let widths: Vec<f64> = horizontal.bars().map(|b| b.rect.width).collect();
    assert_close(&relative_to_max(&widths), &by_max);

    let area = render(&series, VisualizationMode::Area, Progress::COMPLETE);
    let fills: Vec<f64> = area.areas().map(|a| a.rect.height).collect();
    assert_close(&relative_to_max(&fills), &by_max);

    let points = render(&series, VisualizationMode::Points, Progress::COMPLETE);
    let baseline = points.height - ChartConfig::default().margin.bottom;
    let rises: Vec<f64> = points.points().map(|p| baseline - p.cy).collect();
    assert_close(&relative_to_max(&rises), &by_max);

    assert!((by_max[2] - shares[2]).abs() > 0.1);
}

#[test]
fn test_huge_counts_sweep_evenly() {
    let series = status_counts(&[i64::MAX, i64::MAX, i64::MAX]);
    let frame = render(&series, VisualizationMode::Ring, Progress::COMPLETE);

    let sweeps: Vec<f64> = frame.arcs().map(|a| a.sweep_angle_deg).collect();
    assert_close(&sweeps, &[120.0, 120.0, 120.0]);
    assert_eq!(frame.total, 3 * i64::MAX as u128);
    assert!(frame.is_finite());
}

#[test]
fn test_viewport_snaps_between_layouts() {
    let series = status_counts(&[3, 2, 5]);
    let renderer = ChartRenderer::default();

    let compact = renderer.render(&series, VisualizationMode::Ring, ViewportClass::Compact, Progress::COMPLETE);
    let regular = renderer.render(&series, VisualizationMode::Ring, ViewportClass::Regular, Progress::COMPLETE);

    assert_eq!(compact.width, 160.0);
    assert_eq!(regular.width, 220.0);

    let compact_sweeps: Vec<f64> = compact.arcs().map(|a| a.sweep_angle_deg).collect();
    let regular_sweeps: Vec<f64> = regular.arcs().map(|a| a.sweep_angle_deg).collect();
    assert_close(&compact_sweeps, &regular_sweeps);
}
