//! Range membership predicates.
//!
//! Unlike the sanitizer-side clamps, these never coerce: non-numeric input
//! fails validation instead of being pulled into range.

use serde_json::Value;

/// Whether `value` lies in `[min, max]` inclusive. NaN always fails.
pub fn range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Whether a JSON value is numeric and lies in `[min, max]` inclusive.
pub fn range_value(value: &Value, min: f64, max: f64) -> bool {
    match value.as_f64() {
        Some(v) => range(v, min, max),
        None => false,
    }
}

/// Whether `value` is a percentage in `[0, 100]`.
pub fn percentage(value: f64) -> bool {
    range(value, 0.0, 100.0)
}
