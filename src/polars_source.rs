#![cfg(feature = "polars")]

use crate::data_types::{DataPoint, Series};
use polars::prelude::{DataFrame, DataType};

/// Builds a series from two columns of a `DataFrame`.
///
/// Follows the same never-fail contract as `normalize`: a missing column
/// yields an empty series, and nulls or values that do not cast to `f64`
/// become 0. Labels are cast to strings, nulls become `""`.
pub fn normalize_frame(df: &DataFrame, label_col: &str, value_col: &str) -> Series {
    let (labels, values) = match (df.column(label_col), df.column(value_col)) {
        (Ok(l), Ok(v)) => (l.as_materialized_series(), v.as_materialized_series()),
        _ => {
            tracing::warn!(label_col, value_col, "data frame is missing a chart column");
            return Series::default();
        }
    };

    let labels = match labels.cast(&DataType::String) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, label_col, "label column cannot be read as text");
            return Series::default();
        }
    };
    let values = match values.cast(&DataType::Float64) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, value_col, "value column cannot be read as numbers");
            return Series::default();
        }
    };

    let (Ok(label_ca), Ok(value_ca)) = (labels.str(), values.f64()) else {
        return Series::default();
    };

    label_ca
        .iter()
        .zip(value_ca.iter())
        .map(|(label, value)| DataPoint::new(label.unwrap_or_default(), value.unwrap_or(0.0)))
        .collect()
}
