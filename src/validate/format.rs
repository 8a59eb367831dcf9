//! Fixed-format value validators: colors, phone numbers, times, dates, and
//! host-delegated email/URL/timezone checks.

use std::sync::OnceLock;

use regex::Regex;

use crate::host::{DateTimeParser, EmailSyntax, TimezoneRegistry, UrlSyntax};

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap())
}

fn phone_chars_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9 ().\-]+$").unwrap())
}

fn time_hhmm_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$").unwrap())
}

/// `#rgb` or `#rrggbb` hex color.
pub fn hex_color(value: &str) -> bool {
    hex_color_regex().is_match(value)
}

/// Lenient phone number: an optional leading `+`, then digits with common
/// separators, carrying 7 to 20 digits total.
pub fn phone(value: &str) -> bool {
    let trimmed = value.trim();
    if !phone_chars_regex().is_match(trimmed) {
        return false;
    }
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    (7..=20).contains(&digits)
}

/// 24-hour `HH:MM` time.
pub fn time_hhmm(value: &str) -> bool {
    time_hhmm_regex().is_match(value)
}

/// Whether `value` parses against the date/time `format` pattern.
pub fn date(value: &str, format: &str, host: &dyn DateTimeParser) -> bool {
    host.parse(value, format).is_ok()
}

/// Structural email check via the host capability.
pub fn email(value: &str, host: &dyn EmailSyntax) -> bool {
    host.is_email(value)
}

/// Structural URL check via the host capability.
pub fn url(value: &str, host: &dyn UrlSyntax) -> bool {
    host.is_url(value)
}

/// Timezone identifier check via the host registry.
pub fn timezone(value: &str, host: &dyn TimezoneRegistry) -> bool {
    host.is_timezone(value)
}
