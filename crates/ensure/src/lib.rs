//! # ensured-outcomes
//!
//! Guard clauses for function arguments: null, empty and whitespace checks,
//! string length bounds, pattern matching, and lower bounds on ordered
//! (typically date-like) values.
//!
//! Every guard returns `Result<(), ArgumentViolation>`. The violation names
//! the offending parameter exactly as the caller labelled it and carries a
//! [`ViolationKind`] with the bound, pattern or value that explains the
//! failure.
//!
//! ## Quick Start
//!
//! ```
//! use ensured_outcomes::{ArgumentViolation, ensure};
//!
//! fn rename(name: &str) -> Result<(), ArgumentViolation> {
//!     ensure::not_null_or_whitespace(name, "name")?;
//!     ensure::length_between(name, 1, 64, "name")?;
//!     Ok(())
//! }
//!
//! assert!(rename("report.pdf").is_ok());
//! assert_eq!(rename("   ").unwrap_err().to_string(),
//!            "[name] whitespace: String must not consist only of whitespace");
//! ```
//!
//! ## Guards
//!
//! | Function | Fails when |
//! |---|---|
//! | [`ensure::not_null`] | value is `None` |
//! | [`ensure::not_null_or_empty`] | null or `""` |
//! | [`ensure::not_null_or_whitespace`] | null, `""`, or only whitespace |
//! | [`ensure::length_between`] | null, or length outside `min..=max` |
//! | [`ensure::matches_pattern`] | null, or no full match |
//! | [`ensure::in_range`] | value `<` minimum |
//!
//! The [`checks`] module holds the reusable check types behind each guard.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ArgumentViolation`] and
//!   [`ViolationKind`], plus `ArgumentViolation::to_json_value`.

pub mod checks;
pub mod ensure;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;

pub use error::{ArgumentViolation, ViolationKind};
