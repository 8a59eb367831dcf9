//! Validation against a caller-supplied regex.

use regex::Regex;

/// Whether `value` matches `pattern`.
///
/// A pattern that fails to compile makes the value invalid; compile errors
/// are never propagated.
pub fn pattern(value: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(value),
        Err(err) => {
            tracing::debug!(pattern, error = %err, "pattern failed to compile");
            false
        }
    }
}
