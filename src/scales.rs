use crate::data_types::data::min_max;
use crate::data_types::ScaleOrientation;
use serde::{Deserialize, Serialize};

/// Linear mapping from a value domain onto a pixel range.
///
/// `domain_max` is always strictly greater than `domain_min`: a zero-width
/// domain is widened to `[min, min + 1]` on construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ScaleFields")]
pub struct ChartScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
    orientation: ScaleOrientation,
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d_min, d_max) = guard_domain(domain.0, domain.1);
        Self {
            domain_min: d_min,
            domain_max: d_max,
            range_min: range.0,
            range_max: range.1,
            orientation: ScaleOrientation::Ascending,
        }
    }

    /// Builds a scale over `values`.
    ///
    /// With `reserve_for_zero` the domain is extended down to include 0.
    /// An empty slice yields the guarded domain `[0, 1]`.
    pub fn build(
        values: &[f64],
        pixel_low: f64,
        pixel_high: f64,
        reserve_for_zero: bool,
    ) -> Self {
        let (lo, hi) =
            min_max(values.iter().copied().filter(|v| v.is_finite())).unwrap_or((0.0, 0.0));
        let d_min = if reserve_for_zero { lo.min(0.0) } else { lo };
        Self::new_linear((d_min, hi), (pixel_low, pixel_high))
    }

    pub fn with_orientation(mut self, orientation: ScaleOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn orientation(&self) -> ScaleOrientation {
        self.orientation
    }

    pub fn map(&self, value: f64) -> f64 {
        let t = self.normalize(value);
        let span = self.range_max - self.range_min;
        let res = match self.orientation {
            ScaleOrientation::Ascending => self.range_min + t * span,
            ScaleOrientation::Inverted => self.range_max - t * span,
        };
        if res.is_finite() {
            res
        } else {
            self.range_min
        }
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let span = self.range_max - self.range_min;
        if span.abs() < f64::EPSILON {
            return self.domain_min;
        }
        let t = match self.orientation {
            ScaleOrientation::Ascending => (pixel - self.range_min) / span,
            ScaleOrientation::Inverted => (self.range_max - pixel) / span,
        };
        self.domain_min + t * self.width()
    }

    /// Position of `value` within the domain, `0.0` at `domain_min`.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.domain_min) / self.width()
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    pub fn width(&self) -> f64 {
        self.domain_max - self.domain_min
    }
}

/// Serialized form of a scale. Deserialization goes back through
/// `new_linear` so the domain guard still applies.
#[derive(Deserialize)]
struct ScaleFields {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
    #[serde(default)]
    orientation: ScaleOrientation,
}

impl From<ScaleFields> for ChartScale {
    fn from(f: ScaleFields) -> Self {
        ChartScale::new_linear((f.domain_min, f.domain_max), (f.range_min, f.range_max))
            .with_orientation(f.orientation)
    }
}

fn guard_domain(min: f64, max: f64) -> (f64, f64) {
    let min = if min.is_finite() { min } else { 0.0 };
    let max = if max.is_finite() { max } else { min };
    let (min, max) = if max < min { (max, min) } else { (min, max) };
    if max - min == 0.0 {
        (min, min + 1.0)
    } else {
        (min, max)
    }
}
