//! Scalar string sanitizers.
//!
//! Thin delegations to host capabilities plus the fixed-vocabulary option
//! sanitizer. Every function returns a usable value; structurally invalid
//! input degrades to an empty string or the configured default.

use crate::host::{AllowList, EmailSyntax, HtmlSanitizer, SlugRules, TextNormalizer, UrlSyntax};

/// Plain text: control characters stripped, whitespace collapsed.
pub fn text(raw: &str, host: &dyn TextNormalizer) -> String {
    host.clean(raw)
}

/// Identifier key: lower-case, `[a-z0-9_-]` only.
pub fn key(raw: &str, host: &dyn SlugRules) -> String {
    host.key(raw)
}

/// URL slug: lower-case, dash-separated.
pub fn slug(raw: &str, host: &dyn SlugRules) -> String {
    host.slugify(raw)
}

/// Email address: trimmed and lower-cased; empty when structurally invalid.
pub fn email(raw: &str, host: &dyn EmailSyntax) -> String {
    let normalized = raw.trim().to_lowercase();
    if host.is_email(&normalized) {
        normalized
    } else {
        String::new()
    }
}

/// URL: trimmed; empty when it has no parseable scheme and host.
pub fn url(raw: &str, host: &dyn UrlSyntax) -> String {
    let trimmed = raw.trim();
    if host.is_url(trimmed) {
        trimmed.to_string()
    } else {
        String::new()
    }
}

/// HTML with tags outside the allow-list removed.
pub fn html(raw: &str, allow: &AllowList, host: &dyn HtmlSanitizer) -> String {
    host.strip(raw, allow)
}

/// Fixed-vocabulary sanitizer: trim and lower-case `value`, return it when it
/// is one of `allowed`, otherwise return `default`.
pub fn option(value: &str, allowed: &[&str], default: &str) -> String {
    let normalized = value.trim().to_lowercase();
    if allowed.iter().any(|a| *a == normalized) {
        normalized
    } else {
        default.to_string()
    }
}

/// A reusable fixed vocabulary, for building status/type sanitizers once and
/// applying them per value.
#[derive(Debug, Clone)]
pub struct OptionSet {
    allowed: Vec<String>,
    default: String,
}

impl OptionSet {
    pub fn new<I, S>(allowed: I, default: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(|s| s.into()).collect(),
            default: default.to_string(),
        }
    }

    pub fn apply(&self, value: &str) -> String {
        let normalized = value.trim().to_lowercase();
        if self.allowed.iter().any(|a| *a == normalized) {
            normalized
        } else {
            self.default.clone()
        }
    }
}
