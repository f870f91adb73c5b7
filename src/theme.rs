use crate::data_types::Color;
use serde::{Deserialize, Serialize};

/// Used when a palette is empty.
pub const FALLBACK_COLOR: Color = Color::rgb(0x9c, 0xa3, 0xaf);

pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::rgb(0x3b, 0x82, 0xf6),
    Color::rgb(0x10, 0xb9, 0x81),
    Color::rgb(0xf5, 0x9e, 0x0b),
    Color::rgb(0xef, 0x44, 0x44),
    Color::rgb(0x8b, 0x5c, 0xf6),
    Color::rgb(0x06, 0xb6, 0xd4),
    Color::rgb(0xec, 0x48, 0x99),
    Color::rgb(0x84, 0xcc, 0x16),
];

/// Colours and sizes for the non-data primitives (gridlines, labels).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub grid_line: Color,
    pub axis_label: Color,
    pub value_label: Color,
    pub slice_label: Color,
    pub axis_label_size: f64,
    pub value_label_size: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            grid_line: Color::rgb(0xe5, 0xe7, 0xeb),
            axis_label: Color::rgb(0x6b, 0x72, 0x80),
            value_label: Color::rgb(0x37, 0x41, 0x51),
            slice_label: Color::rgb(0xff, 0xff, 0xff),
            axis_label_size: 11.0,
            value_label_size: 10.0,
        }
    }
}
