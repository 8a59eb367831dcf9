//! Numeric coercion and clamping helpers.
//!
//! All functions degrade instead of failing: non-numeric input coerces to a
//! documented default and the result is always inside the requested bounds.
//! Coercion is lenient the way loosely-typed form input expects: a leading
//! numeric prefix counts ("42px" is 42), anything else is non-numeric.

use std::sync::OnceLock;

use regex::Regex;

fn numeric_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap())
}

/// Coerce a string to `f64` by its leading numeric prefix.
pub(crate) fn coerce_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let m = numeric_prefix_regex().find(trimmed)?;
    m.as_str().parse().ok().filter(|v: &f64| v.is_finite())
}

/// Clamp a number into `[min, max]` without panicking on inverted bounds.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Coerce to float and clamp; non-numeric input maps to `0.0` before clamping.
pub fn range_default_zero(raw: &str, min: f64, max: f64) -> f64 {
    clamp(coerce_f64(raw).unwrap_or(0.0), min, max)
}

/// Coerce to float and clamp; non-numeric input maps to the lower bound.
pub fn range_clamp_to_min(raw: &str, min: f64, max: f64) -> f64 {
    clamp(coerce_f64(raw).unwrap_or(min), min, max)
}

/// Coerce to integer (truncating toward zero) and clamp into `[min, max]`.
pub fn int_range(raw: &str, min: i64, max: i64) -> i64 {
    let value = coerce_f64(raw).unwrap_or(0.0).trunc();
    let value = if value <= i64::MIN as f64 {
        i64::MIN
    } else if value >= i64::MAX as f64 {
        i64::MAX
    } else {
        value as i64
    };
    value.max(min).min(max)
}

/// A 1-to-5 rating.
pub fn rating(raw: &str) -> i64 {
    int_range(raw, 1, 5)
}

/// A percentage clamped into `[0, 100]`.
pub fn percent(raw: &str) -> f64 {
    range_default_zero(raw, 0.0, 100.0)
}

/// Coerce to a plain integer; non-numeric input is `0`.
pub fn int(raw: &str) -> i64 {
    int_range(raw, i64::MIN, i64::MAX)
}

/// Coerce to a plain float; non-numeric input is `0.0`.
pub fn float(raw: &str) -> f64 {
    coerce_f64(raw).unwrap_or(0.0)
}

/// Coerce a string to a boolean flag.
///
/// `1`, `true`, `yes`, and `on` (any case, surrounding whitespace ignored)
/// are true; everything else is false.
pub fn boolean(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
