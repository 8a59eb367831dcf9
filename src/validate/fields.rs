//! Required-field checking over JSON-shaped data.

use serde_json::{Map, Value};

/// Whether `value` counts as present for a required field.
///
/// Strings must be non-empty after trimming; arrays and objects must be
/// non-empty; numbers and booleans always count, so `0`, `0.0`, and `false`
/// are present — a zero is meaningful data, not absence of data. `null` is
/// absent.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
    }
}

/// Return the required field names missing or empty in `data`, in the order
/// of `required` (not the order of the mapping).
pub fn required_fields(data: &Map<String, Value>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|field| !data.get(**field).map(is_present).unwrap_or(false))
        .map(|field| field.to_string())
        .collect()
}
