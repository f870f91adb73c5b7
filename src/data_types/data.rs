use serde::{Deserialize, Serialize};

/// One labelled value of a series.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    /// Non-finite values are stored as `0.0`.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: if value.is_finite() { value } else { 0.0 },
        }
    }
}

/// Ordered sequence of data points. Insertion order is display order.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new(points: Vec<DataPoint>) -> Self {
        points.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Returns `(min, max)` of the values, or `None` for an empty series.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(self.points.iter().map(|p| p.value))
    }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self {
            points: iter
                .into_iter()
                .map(|p| DataPoint::new(p.label, p.value))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

pub(crate) fn min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
