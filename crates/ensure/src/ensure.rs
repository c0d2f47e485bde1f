//! Guard clauses for function arguments
//!
//! Each function checks one precondition and either returns `Ok(())` or an
//! [`ArgumentViolation`] naming the offending parameter. Chain them with `?`;
//! the first failure wins.
//!
//! # Examples
//!
//! ```
//! use ensured_outcomes::{ArgumentViolation, ensure};
//!
//! fn register(username: &str, email: Option<&str>) -> Result<(), ArgumentViolation> {
//!     ensure::not_null_or_whitespace(username, "username")?;
//!     ensure::length_between(username, 3, 20, "username")?;
//!     ensure::matches_pattern(&email, r"[^@\s]+@[^@\s]+", "email")?;
//!     Ok(())
//! }
//!
//! assert!(register("alice", Some("alice@example.com")).is_ok());
//!
//! let error = register("al", Some("al@example.com")).unwrap_err();
//! assert_eq!(error.parameter, "username");
//! assert_eq!(error.code(), "length_out_of_range");
//!
//! let error = register("alice", None).unwrap_err();
//! assert_eq!(error.parameter, "email");
//! assert_eq!(error.code(), "null");
//! ```

use std::fmt::Display;

use crate::checks::{LengthBetween, MatchesPattern, NotEmpty, NotWhitespace, not_before};
use crate::error::{ArgumentViolation, ViolationKind};
use crate::foundation::{AsText, Check, CheckTextExt};

/// Fails if `value` is `None`.
pub fn not_null<T>(value: &Option<T>, parameter_name: &str) -> Result<(), ArgumentViolation> {
    if value.is_some() {
        Ok(())
    } else {
        Err(ArgumentViolation::new(parameter_name, ViolationKind::Null))
    }
}

/// Fails if `value` is null or has zero length.
pub fn not_null_or_empty<S>(value: &S, parameter_name: &str) -> Result<(), ArgumentViolation>
where
    S: AsText + ?Sized,
{
    NotEmpty.ensure_text(value, parameter_name)
}

/// Fails if `value` is null, empty, or consists only of whitespace.
pub fn not_null_or_whitespace<S>(value: &S, parameter_name: &str) -> Result<(), ArgumentViolation>
where
    S: AsText + ?Sized,
{
    NotWhitespace.ensure_text(value, parameter_name)
}

/// Fails if `value` is null or its length (in chars) is outside
/// `minimum_length..=maximum_length`.
///
/// Inverted bounds fail with [`ViolationKind::InvalidBounds`] whatever the
/// value. Use [`LengthBetween`] directly to count bytes or UTF-16 units.
pub fn length_between<S>(
    value: &S,
    minimum_length: usize,
    maximum_length: usize,
    parameter_name: &str,
) -> Result<(), ArgumentViolation>
where
    S: AsText + ?Sized,
{
    LengthBetween::new(minimum_length, maximum_length)
        .map_err(|kind| ArgumentViolation::new(parameter_name, kind))?
        .ensure_text(value, parameter_name)
}

/// Fails if `value` is null or does not match `pattern` in full.
///
/// The pattern must match the entire string; `"[0-9]+"` rejects `"a1"`.
/// An invalid pattern fails with [`ViolationKind::InvalidPattern`]. The
/// pattern is compiled on every call; build a [`MatchesPattern`] once for
/// hot paths.
pub fn matches_pattern<S>(
    value: &S,
    pattern: &str,
    parameter_name: &str,
) -> Result<(), ArgumentViolation>
where
    S: AsText + ?Sized,
{
    MatchesPattern::new(pattern)
        .map_err(|kind| ArgumentViolation::new(parameter_name, kind))?
        .ensure_text(value, parameter_name)
}

/// Fails if `value` is less than `min_value`. Equal values pass.
///
/// Typically used with date-like values; any `PartialOrd + Display` type
/// works. Values that cannot be ordered against `min_value` fail.
pub fn in_range<T>(value: &T, min_value: &T, parameter_name: &str) -> Result<(), ArgumentViolation>
where
    T: PartialOrd + Display + ?Sized,
{
    not_before(min_value).ensure(&value, parameter_name)
}
