use chart_layout::data_types::{ChartConfig, DataPoint, Margins, Series};
use chart_layout::plot_types::bar::{bar_scale, layout_bars};
use chart_layout::{BarLayoutEngine, ChartLayout, LayoutEngine};

fn config() -> ChartConfig {
    // Plot area: 360 x 160.
    ChartConfig::new(400.0, 200.0)
        .with_margins(Margins {
            top: 20.0,
            bottom: 20.0,
            left: 40.0,
            right: 0.0,
        })
        .with_bar_gap(10.0)
}

fn series(values: &[(&str, f64)]) -> Series {
    values.iter().map(|(l, v)| DataPoint::new(*l, *v)).collect()
}

#[test]
fn test_bar_heights_scale_to_domain_max() {
    let cfg = config();
    let s = series(&[("Jan", 10.0), ("Feb", 20.0)]);
    let scale = bar_scale(&s, &cfg);
    assert_eq!(scale.domain(), (0.0, 20.0));

    let bars = layout_bars(&s, &scale, &cfg);
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].label, "Jan");
    assert_eq!(bars[0].height, 80.0);
    assert_eq!(bars[1].height, 160.0);

    // Bars grow upward from the baseline at y = 180.
    assert_eq!(bars[0].y, 100.0);
    assert_eq!(bars[1].y, 20.0);
    assert_eq!(bars[1].value_label, "20.0");
}

#[test]
fn test_single_bar_spans_plot_width() {
    let cfg = config();
    let s = series(&[("only", 5.0)]);
    let bars = layout_bars(&s, &bar_scale(&s, &cfg), &cfg);
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].x, 40.0);
    assert_eq!(bars[0].width, cfg.plot_width() - cfg.bar_gap);
    assert_eq!(bars[0].height, 160.0);
}

#[test]
fn test_all_zero_values_have_zero_height() {
    let cfg = config();
    let s = series(&[("a", 0.0), ("b", 0.0), ("c", 0.0)]);
    let bars = layout_bars(&s, &bar_scale(&s, &cfg), &cfg);
    assert_eq!(bars.len(), 3);
    for bar in &bars {
        assert_eq!(bar.height, 0.0);
        assert_eq!(bar.y, 180.0);
        assert!(bar.x.is_finite() && bar.width.is_finite());
    }
}

#[test]
fn test_colors_cycle_through_palette() {
    let cfg = config();
    let n = cfg.palette.len() + 2;
    let s: Series = (0..n).map(|i| DataPoint::new(format!("p{i}"), 1.0)).collect();
    let bars = layout_bars(&s, &bar_scale(&s, &cfg), &cfg);
    assert_eq!(bars[0].color, bars[cfg.palette.len()].color);
    assert_eq!(bars[1].color, bars[cfg.palette.len() + 1].color);
    assert_ne!(bars[0].color, bars[1].color);
}

#[test]
fn test_engine_on_empty_series() {
    let layout = BarLayoutEngine.layout(&Series::default(), &config());
    assert!(layout.is_empty());
    assert!(layout.to_primitives(&config()).is_empty());
    match layout {
        ChartLayout::Bar(bar) => assert!(bar.ticks.is_empty()),
        other => panic!("expected bar layout, got {:?}", other.kind()),
    }
}

#[test]
fn test_engine_emits_five_ticks() {
    let layout = BarLayoutEngine.layout(&series(&[("Jan", 10.0), ("Feb", 20.0)]), &config());
    let bar = layout.as_bar().unwrap();
    let labels: Vec<&str> = bar.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "5", "10", "15", "20"]);
    assert_eq!(bar.ticks[0].pixel_position, 180.0);
    assert_eq!(bar.ticks[4].pixel_position, 20.0);
}

#[test]
fn test_zero_tick_matches_bar_baseline_with_negatives() {
    let cfg = config();
    let layout = BarLayoutEngine.layout(&series(&[("a", -5.0), ("b", 5.0)]), &cfg);
    let bar = layout.as_bar().unwrap();

    let zero = bar.ticks.iter().find(|t| t.label == "0").unwrap();
    assert_eq!(zero.pixel_position, 180.0);

    let b = &bar.bars[1];
    assert_eq!(b.y + b.height, zero.pixel_position);
    let top = bar.ticks.last().unwrap();
    assert_eq!(top.label, "5");
    assert_eq!(b.y, top.pixel_position);

    // The negative bar collapses onto the same baseline.
    assert_eq!(bar.bars[0].height, 0.0);
    assert_eq!(bar.bars[0].y, zero.pixel_position);
}

#[test]
fn test_all_negative_values_stay_on_baseline() {
    let cfg = config();
    let layout = BarLayoutEngine.layout(&series(&[("a", -1.0), ("b", -8.0)]), &cfg);
    let bar = layout.as_bar().unwrap();
    assert_eq!(bar.ticks[0].label, "0");
    assert_eq!(bar.ticks[0].pixel_position, 180.0);
    assert!(bar.bars.iter().all(|b| b.height == 0.0 && b.y == 180.0));
}

#[test]
fn test_oversized_gap_stays_inside_plot() {
    let cfg = config().with_bar_gap(100.0);
    let s: Series = (0..12).map(|i| DataPoint::new(format!("b{i}"), 1.0)).collect();
    let bars = layout_bars(&s, &bar_scale(&s, &cfg), &cfg);
    assert_eq!(bars.len(), 12);
    let right_edge = cfg.width - cfg.margins.right;
    for bar in &bars {
        assert!(bar.width >= 0.0);
        assert!(bar.x + bar.width <= right_edge, "bar at {} past {}", bar.x, right_edge);
    }
}
