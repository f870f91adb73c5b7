#[cfg(feature = "polars")]
use chart_layout::polars_source::normalize_frame;
#[cfg(feature = "polars")]
use polars::prelude::*;

#[test]
#[cfg(feature = "polars")]
fn test_polars_frame_to_series() {
    let df = df!(
        "project" => &["Alpha", "Beta", "Gamma"],
        "hours" => &[12i64, 30, 8]
    )
    .unwrap();

    let series = normalize_frame(&df, "project", "hours");
    assert_eq!(series.len(), 3);
    assert_eq!(series.points()[1].label, "Beta");
    assert_eq!(series.values(), vec![12.0, 30.0, 8.0]);
}

#[test]
#[cfg(feature = "polars")]
fn test_polars_nulls_and_missing_columns() {
    let df = df!(
        "label" => &[Some("a"), None],
        "value" => &[None, Some(2.5f64)]
    )
    .unwrap();

    let series = normalize_frame(&df, "label", "value");
    assert_eq!(series.points()[0].value, 0.0);
    assert_eq!(series.points()[1].label, "");
    assert_eq!(series.points()[1].value, 2.5);

    assert!(normalize_frame(&df, "label", "missing").is_empty());
}
