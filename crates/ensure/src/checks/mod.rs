//! Reusable checks
//!
//! Each guard in [`crate::ensure`] is backed by one of these types. Build a
//! check once and apply it many times when the same rule guards a hot path;
//! this matters most for [`MatchesPattern`], which compiles its regex up
//! front.
//!
//! # Examples
//!
//! ```
//! use ensured_outcomes::prelude::*;
//!
//! let sku = MatchesPattern::new("[A-Z]{3}-[0-9]{4}").unwrap();
//! assert!(sku.ensure_text("ABC-1234", "sku").is_ok());
//! assert!(sku.ensure_text("ABC-12345", "sku").is_err());
//! ```

pub mod length;
pub mod pattern;
pub mod presence;
pub mod range;

pub use length::{LengthBetween, LengthMode};
pub use pattern::{MatchMode, MatchesPattern};
pub use presence::{NotEmpty, NotWhitespace, not_empty, not_whitespace};
pub use range::{NotBefore, not_before};
