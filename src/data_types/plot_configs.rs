use super::color::Palette;
use crate::theme::ChartTheme;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            bottom: 40.0,
            left: 50.0,
            right: 20.0,
        }
    }
}

/// Caller-owned chart settings. Passed by reference into every layout call
/// and never mutated by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub palette: Palette,
    pub margins: Margins,
    /// Horizontal space between adjacent bars, in pixels.
    pub bar_gap: f64,
    pub marker_radius: f64,
    pub stroke_width: f64,
    pub theme: ChartTheme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            palette: Palette::default(),
            margins: Margins::default(),
            bar_gap: 10.0,
            marker_radius: 4.0,
            stroke_width: 2.0,
            theme: ChartTheme::default(),
        }
    }
}

impl ChartConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_bar_gap(mut self, gap: f64) -> Self {
        self.bar_gap = gap;
        self
    }

    /// Reads a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid chart config")
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    /// Y pixel of the value axis origin (bottom of the plot area).
    pub fn baseline(&self) -> f64 {
        self.height - self.margins.bottom
    }
}
