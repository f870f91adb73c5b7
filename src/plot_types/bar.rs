use super::LayoutEngine;
use crate::axis::AxisGenerator;
use crate::chart::{ChartKind, ChartLayout};
use crate::data_types::{
    ChartConfig, Color, Primitive, ScaleOrientation, Series, TextAnchor, Tick,
};
use crate::scales::ChartScale;
use crate::utils::number_formatter::format_value;
use serde::{Deserialize, Serialize};

/// Gap between the top of a bar and its value label.
const VALUE_LABEL_OFFSET: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub label: String,
    pub value_label: String,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub bars: Vec<BarRect>,
    pub ticks: Vec<Tick>,
}

impl BarLayout {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn to_primitives(&self, config: &ChartConfig) -> Vec<Primitive> {
        if self.is_empty() {
            return Vec::new();
        }
        let theme = &config.theme;
        let mut out = AxisGenerator::value_axis_primitives(&self.ticks, config);
        out.reserve(self.bars.len() * 3);
        for bar in &self.bars {
            out.push(Primitive::Rect {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                color: bar.color,
            });
            out.push(Primitive::Text {
                x: bar.center_x(),
                y: bar.y - VALUE_LABEL_OFFSET,
                text: bar.value_label.clone(),
                anchor: TextAnchor::Middle,
                size: theme.value_label_size,
                color: theme.value_label,
            });
            out.push(AxisGenerator::category_label(bar.center_x(), &bar.label, config));
        }
        out
    }
}

/// Value scale used by bar charts: domain `[0, max]`, top-origin pixels.
///
/// Negative values are drawn with zero height, so they are clamped before
/// building the domain. This keeps the "0" tick on the baseline the bars
/// grow from.
pub fn bar_scale(series: &Series, config: &ChartConfig) -> ChartScale {
    let values: Vec<f64> = series.iter().map(|p| p.value.max(0.0)).collect();
    ChartScale::build(&values, config.margins.top, config.baseline(), true)
        .with_orientation(ScaleOrientation::Inverted)
}

/// Lays out one rectangle per data point, growing upward from the baseline.
///
/// Heights are `value * plot_height / domain_max`. Negative values get zero
/// height; a non-positive `domain_max` is treated as 1.
pub fn layout_bars(series: &Series, scale: &ChartScale, config: &ChartConfig) -> Vec<BarRect> {
    let n = series.len();
    if n == 0 {
        return Vec::new();
    }

    // Each bar owns an equal slot; the gap never exceeds the slot.
    let slot = config.plot_width() / n as f64;
    let gap = config.bar_gap.clamp(0.0, slot);
    let bar_width = slot - gap;

    let (_, domain_max) = scale.domain();
    let domain_max = if domain_max > 0.0 { domain_max } else { 1.0 };
    let vertical_factor = config.plot_height() / domain_max;
    let baseline = config.baseline();

    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = point.value.max(0.0) * vertical_factor;
            BarRect {
                x: config.margins.left + i as f64 * slot,
                y: baseline - height,
                width: bar_width,
                height,
                color: config.palette.color_at(i),
                label: point.label.clone(),
                value_label: format_value(point.value),
            }
        })
        .collect()
}

pub struct BarLayoutEngine;

impl LayoutEngine for BarLayoutEngine {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn layout(&self, series: &Series, config: &ChartConfig) -> ChartLayout {
        if series.is_empty() {
            return ChartLayout::Bar(BarLayout::default());
        }
        let scale = bar_scale(series, config);
        let bars = layout_bars(series, &scale, config);
        let ticks = AxisGenerator::default_ticks(&scale);
        tracing::debug!(bars = bars.len(), domain = ?scale.domain(), "bar layout");
        ChartLayout::Bar(BarLayout { bars, ticks })
    }
}
