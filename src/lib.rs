//! Sanitization and validation helpers for scalar and list input values.
//!
//! Two flat collections of pure, stateless functions:
//!
//! - [`sanitize`] normalizes raw input into a value of a fixed target type
//!   and never fails; malformed input degrades to a safe default.
//! - [`validate`] answers whether a value meets a constraint, without
//!   modifying it; malformed input simply fails validation.
//!
//! Host-framework primitives (text cleanup, HTML allow-listing, slug rules,
//! date parsing, and friends) sit behind the capability traits in [`host`];
//! [`host::DefaultHost`] provides structural implementations for stand-alone
//! use.
//!
//! ```
//! use fieldguard::host::DefaultHost;
//! use fieldguard::{sanitize, validate};
//!
//! assert_eq!(sanitize::amount_default("$ 1,234.567"), "1234.57");
//! assert_eq!(sanitize::comma_list("a, ,a,b", &DefaultHost), vec!["a", "b"]);
//! assert!(validate::credit_card("4532015112830366"));
//! ```

pub mod error;
pub mod host;
pub mod sanitize;
pub mod validate;

pub use error::{Error, Result};
pub use host::DefaultHost;
pub use sanitize::{Sanitized, SanitizerKind};
