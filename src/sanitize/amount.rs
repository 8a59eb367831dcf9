//! Monetary amount normalization.
//!
//! Takes free-form user input ("1.234,50 EUR", "$ 1,234.50") and produces a
//! canonical decimal string with a fixed number of fraction digits, `.` as the
//! decimal point, and no thousands separator.

use serde::{Deserialize, Serialize};

/// Separator and precision settings for [`amount`].
///
/// Caller-supplied overrides overlay the defaults field by field; use struct
/// update syntax: `AmountConfig { decimals: 0, ..Default::default() }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountConfig {
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: Option<char>,

    #[serde(default = "default_decimals")]
    pub decimals: u8,

    #[serde(default)]
    pub allow_negative: bool,
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_thousands_separator() -> Option<char> {
    Some(',')
}

fn default_decimals() -> u8 {
    2
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            thousands_separator: default_thousands_separator(),
            decimals: default_decimals(),
            allow_negative: false,
        }
    }
}

/// Normalize a raw amount string to a fixed-precision decimal string.
///
/// Unparsable input degrades to zero, so the default config always yields
/// `"0.00"` for garbage. Rounding is half-away-from-zero. The output is a
/// fixed point: `amount(&amount(x, cfg), cfg) == amount(x, cfg)`.
pub fn amount(raw: &str, config: &AmountConfig) -> String {
    let mut text = raw.to_string();

    if let Some(thousands) = config.thousands_separator {
        if thousands != config.decimal_separator {
            text.retain(|c| c != thousands);
        }
    }

    if config.decimal_separator == ',' {
        text = text.replace(',', ".");
    }

    text.retain(|c| c.is_ascii_digit() || c == '.' || c == '-');

    let mut value: f64 = text.parse().unwrap_or(0.0);
    if !value.is_finite() {
        value = 0.0;
    }
    if !config.allow_negative {
        value = value.abs();
    }

    format_fixed(value, config.decimals)
}

/// Convenience wrapper: normalize with default separators and two decimals.
pub fn amount_default(raw: &str) -> String {
    amount(raw, &AmountConfig::default())
}

fn format_fixed(value: f64, decimals: u8) -> String {
    // Render one digit past the target precision, then round that digit
    // half-away-from-zero on the decimal text. Scaling-and-rounding in f64
    // misrounds inputs like 2.005 whose binary value sits just under the half.
    let extended = format!("{:.*}", usize::from(decimals) + 1, value);
    round_decimal_string(&extended)
}

fn round_decimal_string(text: &str) -> String {
    let negative = text.starts_with('-');
    let unsigned = text.trim_start_matches('-');
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "0"));
    let (kept_frac, last) = frac_part.split_at(frac_part.len() - 1);
    let round_up = last.as_bytes()[0] >= b'5';

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(kept_frac.bytes())
        .map(|b| b - b'0')
        .collect();

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - kept_frac.len();
    let mut out = String::new();
    if negative && digits.iter().any(|&d| d != 0) {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push((b'0' + d) as char);
    }
    out
}
