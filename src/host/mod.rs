//! Host capability seams.
//!
//! The sanitizers and validators lean on primitives the embedding application
//! already has: text cleanup, HTML allow-listing, email/URL syntax checks,
//! slug and key rules, a timezone registry, date parsing, and a JSON codec.
//! Each capability is a small trait so an application can swap in its own
//! rules. [`DefaultHost`] implements all of them with structural checks that
//! are good enough for stand-alone use.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};

/// Strip control characters and excess whitespace from a string.
pub trait TextNormalizer {
    fn clean(&self, input: &str) -> String;
}

/// Tags allowed to survive HTML sanitization. Empty list strips everything.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    pub tags: BTreeSet<String>,
}

impl AllowList {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(|t| t.into().to_lowercase()).collect(),
        }
    }

    pub fn allows(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_lowercase())
    }
}

/// Remove tags and attributes outside a configurable allow-list.
pub trait HtmlSanitizer {
    fn strip(&self, input: &str, allow: &AllowList) -> String;
}

/// RFC-adjacent structural email check.
pub trait EmailSyntax {
    fn is_email(&self, value: &str) -> bool;
}

/// Scheme + host structural URL check.
pub trait UrlSyntax {
    fn is_url(&self, value: &str) -> bool;
}

/// Identifier normalization: slugs (dash-separated) and keys (underscore-safe).
pub trait SlugRules {
    fn slugify(&self, value: &str) -> String;
    fn key(&self, value: &str) -> String;
}

/// Enumerable set of valid timezone identifiers.
pub trait TimezoneRegistry {
    fn is_timezone(&self, value: &str) -> bool;
}

/// Parse a string against a format pattern, returning a normalized
/// representation on success.
pub trait DateTimeParser {
    fn parse(&self, value: &str, format: &str) -> Result<String>;
}

/// Standard JSON serialization with structural validity reporting.
pub trait JsonCodec {
    fn decode(&self, input: &str) -> Result<Value>;
    fn encode(&self, value: &Value) -> Result<String>;
}

/// Everything a full sanitizer dispatch needs from the host.
pub trait HostCapabilities:
    TextNormalizer
    + HtmlSanitizer
    + EmailSyntax
    + UrlSyntax
    + SlugRules
    + TimezoneRegistry
    + DateTimeParser
    + JsonCodec
{
}

impl<T> HostCapabilities for T where
    T: TextNormalizer
        + HtmlSanitizer
        + EmailSyntax
        + UrlSyntax
        + SlugRules
        + TimezoneRegistry
        + DateTimeParser
        + JsonCodec
{
}

/// Built-in host with structural defaults for every capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHost;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?([a-zA-Z][a-zA-Z0-9]*)\b[^>]*>").unwrap())
}

fn timezone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_]+(?:/[A-Za-z0-9_+\-]+)+$").unwrap())
}

impl TextNormalizer for DefaultHost {
    fn clean(&self, input: &str) -> String {
        let stripped: String = input
            .chars()
            .filter(|c| !c.is_control() || c.is_whitespace())
            .collect();
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl HtmlSanitizer for DefaultHost {
    fn strip(&self, input: &str, allow: &AllowList) -> String {
        tag_regex()
            .replace_all(input, |caps: &regex::Captures| {
                let tag = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                if allow.allows(tag) {
                    caps.get(0).map(|m| m.as_str()).unwrap_or("").to_string()
                } else {
                    String::new()
                }
            })
            .into_owned()
    }
}

impl EmailSyntax for DefaultHost {
    fn is_email(&self, value: &str) -> bool {
        email_regex().is_match(value)
    }
}

impl UrlSyntax for DefaultHost {
    fn is_url(&self, value: &str) -> bool {
        match url::Url::parse(value) {
            Ok(parsed) => parsed.has_host(),
            Err(_) => false,
        }
    }
}

impl SlugRules for DefaultHost {
    fn slugify(&self, value: &str) -> String {
        let mut out = String::new();
        let mut prev_was_dash = false;

        for ch in value.trim().chars() {
            let normalized = match ch {
                'a'..='z' | '0'..='9' => Some(ch),
                'A'..='Z' => Some(ch.to_ascii_lowercase()),
                _ if ch.is_whitespace() || ch == '_' || ch == '-' => Some('-'),
                _ => None,
            };

            if let Some(c) = normalized {
                if c == '-' {
                    if out.is_empty() || prev_was_dash {
                        continue;
                    }
                    out.push('-');
                    prev_was_dash = true;
                } else {
                    out.push(c);
                    prev_was_dash = false;
                }
            }
        }

        while out.ends_with('-') {
            out.pop();
        }

        out
    }

    fn key(&self, value: &str) -> String {
        value
            .trim()
            .chars()
            .filter_map(|ch| match ch {
                'a'..='z' | '0'..='9' | '_' | '-' => Some(ch),
                'A'..='Z' => Some(ch.to_ascii_lowercase()),
                _ => None,
            })
            .collect()
    }
}

impl TimezoneRegistry for DefaultHost {
    fn is_timezone(&self, value: &str) -> bool {
        matches!(value, "UTC" | "GMT") || timezone_regex().is_match(value)
    }
}

impl DateTimeParser for DefaultHost {
    fn parse(&self, value: &str, format: &str) -> Result<String> {
        let trimmed = value.trim();

        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.format(format).to_string());
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.format(format).to_string());
        }
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return Ok(time.format(format).to_string());
        }

        Err(Error::DateParse(format!(
            "'{}' does not match format '{}'",
            trimmed, format
        )))
    }
}

impl JsonCodec for DefaultHost {
    fn decode(&self, input: &str) -> Result<Value> {
        Ok(serde_json::from_str(input)?)
    }

    fn encode(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_control_chars() {
        let host = DefaultHost;
        assert_eq!(host.clean("hello\u{0}world"), "helloworld");
    }

    #[test]
    fn clean_collapses_whitespace() {
        let host = DefaultHost;
        assert_eq!(host.clean("  a \t b \n c  "), "a b c");
    }

    #[test]
    fn is_email_accepts_plain_address() {
        assert!(DefaultHost.is_email("user@example.com"));
    }

    #[test]
    fn is_email_rejects_missing_at() {
        assert!(!DefaultHost.is_email("user.example.com"));
        assert!(!DefaultHost.is_email("user@localhost"));
    }

    #[test]
    fn is_url_requires_host() {
        assert!(DefaultHost.is_url("https://example.com/path"));
        assert!(!DefaultHost.is_url("not a url"));
        assert!(!DefaultHost.is_url("mailto:user@example.com"));
    }

    #[test]
    fn slugify_basic_name() {
        assert_eq!(DefaultHost.slugify("My Component"), "my-component");
    }

    #[test]
    fn slugify_strips_special_chars() {
        assert_eq!(DefaultHost.slugify("Hello! @World#"), "hello-world");
    }

    #[test]
    fn slugify_only_special_yields_empty() {
        assert_eq!(DefaultHost.slugify("!@#$%"), "");
    }

    #[test]
    fn key_keeps_underscores() {
        assert_eq!(DefaultHost.key("My_Meta Key!"), "my_metakey");
    }

    #[test]
    fn html_strip_removes_all_tags_by_default() {
        let out = DefaultHost.strip("<b>bold</b> <script>x()</script>", &AllowList::default());
        assert_eq!(out, "bold x()");
    }

    #[test]
    fn html_strip_keeps_allowed_tags() {
        let allow = AllowList::new(["b"]);
        let out = DefaultHost.strip("<b>bold</b><i>it</i>", &allow);
        assert_eq!(out, "<b>bold</b>it");
    }

    #[test]
    fn timezone_accepts_area_city() {
        assert!(DefaultHost.is_timezone("America/New_York"));
        assert!(DefaultHost.is_timezone("UTC"));
        assert!(!DefaultHost.is_timezone("Not A Zone"));
    }

    #[test]
    fn date_parse_normalizes() {
        let out = DefaultHost.parse(" 2024-01-05 ", "%Y-%m-%d").unwrap();
        assert_eq!(out, "2024-01-05");
    }

    #[test]
    fn date_parse_rejects_mismatch() {
        assert!(DefaultHost.parse("05/01/2024", "%Y-%m-%d").is_err());
    }

    #[test]
    fn json_codec_round_trip() {
        let value = DefaultHost.decode(r#"{"a":1}"#).unwrap();
        assert_eq!(DefaultHost.encode(&value).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn json_decode_reports_invalid() {
        assert!(DefaultHost.decode("{not json").is_err());
    }
}
