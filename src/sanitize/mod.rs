//! Sanitizers: best-effort normalization of raw input values.
//!
//! Every function here returns a usable value of a fixed target type and
//! never fails; malformed input degrades to an empty string, zero, a default
//! enum value, or an empty collection.

pub mod amount;
pub mod list;
pub mod number;
pub mod text;

pub use amount::{amount, amount_default, AmountConfig};
pub use list::{comma_list, emails, list, object_ids, object_ids_numeric, ListInput};
pub use number::{
    boolean, clamp, float, int, int_range, percent, range_clamp_to_min, range_default_zero, rating,
};
pub use text::{email, html, key, option, slug, text, url, OptionSet};

use crate::host::{AllowList, HostCapabilities};

/// Target type for [`value`] dispatch.
///
/// Replaces dispatch-by-method-name with an enumerated kind, so every call
/// site names a variant the compiler can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanitizerKind {
    Text,
    Key,
    Slug,
    Email,
    Url,
    Html,
    Amount,
    Int,
    Float,
    Bool,
    Ids,
    List,
    CommaList,
}

/// A sanitized value, tagged with its target type.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitized {
    Text(String),
    Number(f64),
    Int(i64),
    Flag(bool),
    List(Vec<String>),
    Ids(Vec<u64>),
}

/// Sanitize `raw` according to `kind`, using default parameters for the
/// parameterized sanitizers (two-decimal amounts, newline list delimiter,
/// strip-everything HTML allow-list).
pub fn value<H: HostCapabilities>(raw: &str, kind: SanitizerKind, host: &H) -> Sanitized {
    match kind {
        SanitizerKind::Text => Sanitized::Text(text::text(raw, host)),
        SanitizerKind::Key => Sanitized::Text(text::key(raw, host)),
        SanitizerKind::Slug => Sanitized::Text(text::slug(raw, host)),
        SanitizerKind::Email => Sanitized::Text(text::email(raw, host)),
        SanitizerKind::Url => Sanitized::Text(text::url(raw, host)),
        SanitizerKind::Html => Sanitized::Text(text::html(raw, &AllowList::default(), host)),
        SanitizerKind::Amount => Sanitized::Text(amount::amount_default(raw)),
        SanitizerKind::Int => Sanitized::Int(number::int(raw)),
        SanitizerKind::Float => Sanitized::Number(number::float(raw)),
        SanitizerKind::Bool => Sanitized::Flag(number::boolean(raw)),
        SanitizerKind::Ids => Sanitized::Ids(list::object_ids(raw.split(','))),
        SanitizerKind::List => Sanitized::List(list::list(raw, '\n', None, host)),
        SanitizerKind::CommaList => Sanitized::List(list::comma_list(raw, host)),
    }
}
