use serde::{Deserialize, Serialize};

/// Direction in which a scale maps its domain onto the pixel range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleOrientation {
    /// `domain_min` maps to `range_min`.
    #[default]
    Ascending,
    /// `domain_min` maps to `range_max`, for top-origin coordinate systems.
    Inverted,
}

/// Labelled reference point on a value axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub pixel_position: f64,
    pub label: String,
}
