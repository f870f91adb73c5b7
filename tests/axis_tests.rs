use chart_layout::axis::{AxisGenerator, DEFAULT_TICK_COUNT};
use chart_layout::data_types::ScaleOrientation;
use chart_layout::scales::ChartScale;

#[test]
fn test_chart_scale_linear() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));

    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(50.0), 250.0);
    assert_eq!(scale.map(100.0), 500.0);

    assert_eq!(scale.invert(0.0), 0.0);
    assert_eq!(scale.invert(250.0), 50.0);
    assert_eq!(scale.invert(500.0), 100.0);
}

#[test]
fn test_reversed_range_maps_top_origin() {
    // Range given high-to-low behaves like an inverted scale.
    let reversed = ChartScale::new_linear((0.0, 100.0), (200.0, 0.0));
    let inverted = ChartScale::new_linear((0.0, 100.0), (0.0, 200.0))
        .with_orientation(ScaleOrientation::Inverted);
    for v in [0.0, 25.0, 50.0, 100.0] {
        assert_eq!(reversed.map(v), inverted.map(v));
    }
    assert_eq!(inverted.map(0.0), 200.0);
}

#[test]
fn test_build_reserves_zero() {
    let scale = ChartScale::build(&[10.0, 20.0], 0.0, 160.0, true);
    assert_eq!(scale.domain(), (0.0, 20.0));

    let scale = ChartScale::build(&[10.0, 20.0], 0.0, 160.0, false);
    assert_eq!(scale.domain(), (10.0, 20.0));

    let scale = ChartScale::build(&[-4.0, 20.0], 0.0, 160.0, true);
    assert_eq!(scale.domain(), (-4.0, 20.0));
}

#[test]
fn test_build_guards_zero_width_domain() {
    let scale = ChartScale::build(&[7.0, 7.0, 7.0], 0.0, 100.0, false);
    assert_eq!(scale.domain(), (7.0, 8.0));
    assert_eq!(scale.map(7.0), 0.0);

    let scale = ChartScale::build(&[0.0, 0.0], 0.0, 100.0, true);
    assert_eq!(scale.domain(), (0.0, 1.0));

    let scale = ChartScale::build(&[], 0.0, 100.0, true);
    assert_eq!(scale.domain(), (0.0, 1.0));
}

#[test]
fn test_ticks_at_quarter_ratios() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 400.0));
    let ticks = AxisGenerator::build_ticks(&scale, DEFAULT_TICK_COUNT);
    assert_eq!(ticks.len(), 5);

    let positions: Vec<f64> = ticks.iter().map(|t| t.pixel_position).collect();
    assert_eq!(positions, vec![0.0, 100.0, 200.0, 300.0, 400.0]);

    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "25", "50", "75", "100"]);
}

#[test]
fn test_ticks_on_flat_domain() {
    let scale = ChartScale::build(&[3.0], 0.0, 100.0, false);
    let ticks = AxisGenerator::default_ticks(&scale);
    assert_eq!(ticks.len(), 5);
    assert!(ticks.iter().all(|t| t.pixel_position.is_finite()));
    assert_eq!(ticks[0].value, 3.0);
    assert_eq!(ticks[4].value, 4.0);
}

#[test]
fn test_custom_tick_counts() {
    let scale = ChartScale::new_linear((0.0, 10.0), (0.0, 10.0));
    assert!(AxisGenerator::build_ticks(&scale, 0).is_empty());
    assert_eq!(AxisGenerator::build_ticks(&scale, 1)[0].value, 0.0);
    assert_eq!(AxisGenerator::build_ticks(&scale, 3)[1].value, 5.0);
}
