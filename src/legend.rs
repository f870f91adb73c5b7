use crate::data_types::{Color, Palette, Series};
use crate::utils::number_formatter::{format_percentage, format_value};
use serde::{Deserialize, Serialize};

/// One row of a chart legend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: Color,
    pub label: String,
    pub value: String,
    pub percentage: String,
}

/// Legend rows in series order, coloured like the slices or bars they
/// describe. Percentages are rounded independently and are not renormalised.
pub fn build_legend(series: &Series, palette: &Palette) -> Vec<LegendEntry> {
    let total: f64 = series.iter().map(|p| p.value.max(0.0)).sum();
    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let fraction = if total > 0.0 {
                point.value.max(0.0) / total
            } else {
                0.0
            };
            LegendEntry {
                color: palette.color_at(i),
                label: point.label.clone(),
                value: format_value(point.value),
                percentage: format_percentage(fraction),
            }
        })
        .collect()
}
