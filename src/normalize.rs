//! Coercion of arbitrary records into a clean `Series`.
//!
//! Nothing in here fails: malformed input degrades to an empty series or to
//! zero values.

use crate::data_types::{DataPoint, Series};
use serde::Serialize;
use serde_json::Value;

/// Builds a series from a JSON array of records.
///
/// Anything other than an array yields an empty series. For each element the
/// label is read from `label_field` and the value from `value_field`.
pub fn normalize(raw: &Value, label_field: &str, value_field: &str) -> Series {
    let Some(items) = raw.as_array() else {
        if !raw.is_null() {
            tracing::warn!(kind = json_kind(raw), "expected an array of records");
        }
        return Series::default();
    };

    items
        .iter()
        .map(|item| {
            DataPoint::new(
                coerce_label(item.get(label_field)),
                coerce_value(item.get(value_field)),
            )
        })
        .collect()
}

/// Parses `json` and normalises it. Unparsable text yields an empty series.
pub fn normalize_str(json: &str, label_field: &str, value_field: &str) -> Series {
    match serde_json::from_str::<Value>(json) {
        Ok(raw) => normalize(&raw, label_field, value_field),
        Err(e) => {
            tracing::warn!(error = %e, "discarding unparsable chart data");
            Series::default()
        }
    }
}

/// Normalises any serializable records, e.g. rows returned by an API client.
pub fn normalize_records<T: Serialize>(
    records: &[T],
    label_field: &str,
    value_field: &str,
) -> Series {
    match serde_json::to_value(records) {
        Ok(raw) => normalize(&raw, label_field, value_field),
        Err(e) => {
            tracing::warn!(error = %e, "records could not be serialized");
            Series::default()
        }
    }
}

/// Strings pass through, null or missing becomes `""`, other scalars use
/// their JSON text.
pub fn coerce_label(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Finite numbers, numeric strings and booleans convert; everything else is 0.
pub fn coerce_value(raw: Option<&Value>) -> f64 {
    let v = match raw {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
