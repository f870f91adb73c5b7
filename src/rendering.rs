//! Entry points that run the whole pipeline, from raw records to the flat
//! primitive list handed to a rendering adapter.

use crate::chart::{ChartKind, ChartLayout};
use crate::data_types::{ChartConfig, Primitive, Series};
use crate::legend::{build_legend, LegendEntry};
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything a chart widget needs for one render pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartOutput {
    pub layout: ChartLayout,
    pub primitives: Vec<Primitive>,
    pub legend: Vec<LegendEntry>,
}

pub fn layout_chart(kind: ChartKind, series: &Series, config: &ChartConfig) -> ChartLayout {
    kind.engine().layout(series, config)
}

pub fn render_series(kind: ChartKind, series: &Series, config: &ChartConfig) -> ChartOutput {
    let layout = layout_chart(kind, series, config);
    let primitives = layout.to_primitives(config);
    let legend = build_legend(series, &config.palette);
    ChartOutput {
        layout,
        primitives,
        legend,
    }
}

/// Normalises `raw` with the given field mapping, then lays it out.
pub fn render_records(
    kind: ChartKind,
    raw: &Value,
    label_field: &str,
    value_field: &str,
    config: &ChartConfig,
) -> ChartOutput {
    let series = normalize(raw, label_field, value_field);
    render_series(kind, &series, config)
}
