//! Password strength checking.

use serde::{Deserialize, Serialize};

/// Character-class requirements for [`strong_password`].
///
/// Defaults require eight characters with at least one uppercase letter,
/// lowercase letter, digit, and special (non-alphanumeric) character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordPolicy {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_true")]
    pub require_upper: bool,

    #[serde(default = "default_true")]
    pub require_lower: bool,

    #[serde(default = "default_true")]
    pub require_digit: bool,

    #[serde(default = "default_true")]
    pub require_special: bool,
}

fn default_min_length() -> usize {
    8
}

fn default_true() -> bool {
    true
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            require_upper: true,
            require_lower: true,
            require_digit: true,
            require_special: true,
        }
    }
}

/// Whether `password` satisfies `policy`.
///
/// Fails fast on length, then checks each enabled character class
/// independently; a single character may count toward multiple classes.
pub fn strong_password(password: &str, policy: &PasswordPolicy) -> bool {
    if password.chars().count() < policy.min_length {
        return false;
    }
    if policy.require_upper && !password.chars().any(|c| c.is_uppercase()) {
        return false;
    }
    if policy.require_lower && !password.chars().any(|c| c.is_lowercase()) {
        return false;
    }
    if policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if policy.require_special && !password.chars().any(|c| !c.is_alphanumeric()) {
        return false;
    }
    true
}
