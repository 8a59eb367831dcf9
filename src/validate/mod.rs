//! Validators: pure predicates over input values.
//!
//! Every function returns a definite boolean (or list of violated field
//! names) and never mutates its input. Malformed input fails validation; it
//! never produces an error.

pub mod card;
pub mod fields;
pub mod format;
pub mod fs;
pub mod password;
pub mod pattern;
pub mod range;

pub use card::credit_card;
pub use fields::{is_present, required_fields};
pub use format::{date, email, hex_color, phone, time_hhmm, timezone, url};
pub use fs::{readable_file, writable_directory};
pub use password::{strong_password, PasswordPolicy};
pub use pattern::pattern;
pub use range::{percentage, range, range_value};
