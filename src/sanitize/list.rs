//! List and ID-list sanitization.
//!
//! Turns delimiter-separated text (or an existing sequence) into a clean,
//! deduplicated, order-preserving list of strings, with an optional predicate
//! as a final filter.

use std::collections::HashSet;

use crate::host::{EmailSyntax, TextNormalizer};
use crate::sanitize::number;

/// Input to [`list`]: either raw delimiter-separated text or an existing
/// sequence of items.
#[derive(Debug, Clone)]
pub enum ListInput<'a> {
    Text(&'a str),
    Items(&'a [String]),
}

impl<'a> From<&'a str> for ListInput<'a> {
    fn from(text: &'a str) -> Self {
        ListInput::Text(text)
    }
}

impl<'a> From<&'a [String]> for ListInput<'a> {
    fn from(items: &'a [String]) -> Self {
        ListInput::Items(items)
    }
}

impl<'a> From<&'a Vec<String>> for ListInput<'a> {
    fn from(items: &'a Vec<String>) -> Self {
        ListInput::Items(items.as_slice())
    }
}

/// Sanitize a list of strings.
///
/// Text input is split on `delimiter`; sequences are used as-is. Each element
/// is trimmed and cleaned through the host text normalizer; empties are
/// dropped, duplicates keep their first occurrence, and `validator` (when
/// given) filters the survivors. The output never contains empty strings or
/// duplicates, and its order is the first-occurrence order of the input.
pub fn list<'a, I>(
    input: I,
    delimiter: char,
    validator: Option<&dyn Fn(&str) -> bool>,
    host: &dyn TextNormalizer,
) -> Vec<String>
where
    I: Into<ListInput<'a>>,
{
    let owned_items;
    let items: &[String] = match input.into() {
        ListInput::Items(items) => items,
        ListInput::Text(text) => {
            owned_items = text
                .split(delimiter)
                .map(|s| s.to_string())
                .collect::<Vec<_>>();
            &owned_items
        }
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for item in items {
        let cleaned = host.clean(item.trim());
        if cleaned.is_empty() || !seen.insert(cleaned.clone()) {
            continue;
        }
        if let Some(accept) = validator {
            if !accept(&cleaned) {
                continue;
            }
        }
        out.push(cleaned);
    }

    out
}

/// [`list`] with a comma delimiter.
pub fn comma_list<'a, I>(input: I, host: &dyn TextNormalizer) -> Vec<String>
where
    I: Into<ListInput<'a>>,
{
    list(input, ',', None, host)
}

/// [`list`] filtered to syntactically valid email addresses.
pub fn emails<'a, I, H>(input: I, host: &H) -> Vec<String>
where
    I: Into<ListInput<'a>>,
    H: TextNormalizer + EmailSyntax,
{
    list(input, '\n', Some(&|s: &str| host.is_email(s)), host)
}

/// Sanitize a list of object IDs: coerce each element to an unsigned integer
/// (coercion failure is zero), drop non-positive results, and deduplicate
/// preserving first occurrence.
pub fn object_ids<I, S>(values: I) -> Vec<u64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for value in values {
        let id = coerce_id(value.as_ref());
        if id > 0 && seen.insert(id) {
            out.push(id);
        }
    }

    out
}

/// [`object_ids`] over an integer sequence.
pub fn object_ids_numeric(values: &[i64]) -> Vec<u64> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for &value in values {
        let id = value.unsigned_abs();
        if id > 0 && seen.insert(id) {
            out.push(id);
        }
    }

    out
}

// absint-style coercion: numeric prefix, truncated, absolute value.
fn coerce_id(raw: &str) -> u64 {
    let value = number::float(raw).trunc().abs();
    if value >= u64::MAX as f64 {
        u64::MAX
    } else {
        value as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DefaultHost;

    #[test]
    fn splits_on_newlines_by_default_shape() {
        let out = list("a\nb\nc", '\n', None, &DefaultHost);
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn comma_list_trims_and_splits() {
        let out = comma_list("item1, item2, item3", &DefaultHost);
        assert_eq!(out, vec!["item1", "item2", "item3"]);
    }

    #[test]
    fn comma_list_drops_blanks_and_duplicates() {
        let out = comma_list("a, ,a,b", &DefaultHost);
        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn sequence_input_used_as_is() {
        let items = vec!["x ".to_string(), "".to_string(), "x".to_string()];
        let out = list(&items, ',', None, &DefaultHost);
        assert_eq!(out, vec!["x"]);
    }

    #[test]
    fn validator_filters_survivors() {
        let only_short: &dyn Fn(&str) -> bool = &|s| s.len() <= 2;
        let out = list("aa, bbb, cc", ',', Some(only_short), &DefaultHost);
        assert_eq!(out, vec!["aa", "cc"]);
    }

    #[test]
    fn control_characters_cleaned_out() {
        let out = comma_list("ok, \u{0}\u{1}, also\u{0}ok", &DefaultHost);
        assert_eq!(out, vec!["ok", "alsook"]);
    }

    #[test]
    fn emails_keeps_only_valid_addresses() {
        let out = emails("a@example.com\nnot-an-email\nb@example.org", &DefaultHost);
        assert_eq!(out, vec!["a@example.com", "b@example.org"]);
    }

    #[test]
    fn object_ids_dedupes_and_drops_non_positive() {
        let out = object_ids(["3", "1", "3", "0", "abc", "1", "7"]);
        assert_eq!(out, vec![3, 1, 7]);
    }

    #[test]
    fn object_ids_coerces_numeric_prefixes() {
        assert_eq!(object_ids(["12abc", "4.9"]), vec![12, 4]);
    }

    #[test]
    fn object_ids_numeric_takes_absolute_value() {
        assert_eq!(object_ids_numeric(&[-5, 5, 0, 2]), vec![5, 2]);
    }
}
