use crate::data_types::{ChartConfig, Primitive, TextAnchor, Tick};
use crate::scales::ChartScale;
use crate::utils::number_formatter::format_tick;

pub const DEFAULT_TICK_COUNT: usize = 5;

/// Gap between the tick label and the left edge of the plot area.
const LABEL_OFFSET: f64 = 8.0;

pub struct AxisGenerator;

impl AxisGenerator {
    /// Evenly spaced ticks across the scale's domain.
    ///
    /// Ticks sit at ratios `i / (count - 1)`, so the default count of 5 gives
    /// `0, 0.25, 0.5, 0.75, 1`. Values are rounded to integers; pixel
    /// positions are taken at the exact ratio so gridlines stay evenly spaced.
    pub fn build_ticks(scale: &ChartScale, count: usize) -> Vec<Tick> {
        let (d_min, d_max) = scale.domain();
        let width = d_max - d_min;
        (0..count)
            .map(|i| {
                let ratio = if count > 1 {
                    i as f64 / (count - 1) as f64
                } else {
                    0.0
                };
                let exact = d_min + ratio * width;
                let value = exact.round();
                Tick {
                    value,
                    pixel_position: scale.map(exact),
                    label: format_tick(value),
                }
            })
            .collect()
    }

    pub fn default_ticks(scale: &ChartScale) -> Vec<Tick> {
        Self::build_ticks(scale, DEFAULT_TICK_COUNT)
    }

    /// Horizontal gridline plus left-hand label for each tick of a value axis.
    pub fn value_axis_primitives(ticks: &[Tick], config: &ChartConfig) -> Vec<Primitive> {
        let theme = &config.theme;
        let x1 = config.margins.left;
        let x2 = config.width - config.margins.right;

        let mut out = Vec::with_capacity(ticks.len() * 2);
        for tick in ticks {
            let y = tick.pixel_position;
            out.push(Primitive::Line {
                x1,
                y1: y,
                x2,
                y2: y,
                stroke_width: 1.0,
                color: theme.grid_line,
            });
            out.push(Primitive::Text {
                x: x1 - LABEL_OFFSET,
                y: y + theme.axis_label_size / 3.0,
                text: tick.label.clone(),
                anchor: TextAnchor::End,
                size: theme.axis_label_size,
                color: theme.axis_label,
            });
        }
        out
    }

    /// Category label centred under `x`, inside the bottom margin.
    pub fn category_label(x: f64, label: &str, config: &ChartConfig) -> Primitive {
        let theme = &config.theme;
        Primitive::Text {
            x,
            y: config.baseline() + theme.axis_label_size + 6.0,
            text: label.to_string(),
            anchor: TextAnchor::Middle,
            size: theme.axis_label_size,
            color: theme.axis_label,
        }
    }
}
