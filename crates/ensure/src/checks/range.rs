//! Lower-bound check for ordered values
//!
//! Works for any `PartialOrd + Display` type, date-like values included
//! (`chrono::NaiveDate`, `chrono::DateTime<Tz>`, ...).

use std::cmp::Ordering;
use std::fmt::Display;

use crate::ViolationKind;
use crate::foundation::Check;

/// Passes when a value is greater than or equal to `min`.
///
/// Values that cannot be ordered against `min` (a NaN, for instance) fail.
///
/// # Examples
///
/// ```
/// use ensured_outcomes::checks::not_before;
/// use ensured_outcomes::foundation::Check;
///
/// let check = not_before(18);
/// assert!(check.check(&18).is_ok());
/// assert!(check.check(&17).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotBefore<T> {
    /// Smallest accepted value (inclusive).
    pub min: T,
}

impl<T> NotBefore<T> {
    /// Creates a lower-bound check.
    pub const fn new(min: T) -> Self {
        Self { min }
    }
}

impl<T: PartialOrd + Display> Check for NotBefore<T> {
    type Input = T;

    fn check(&self, input: &T) -> Result<(), ViolationKind> {
        match input.partial_cmp(&self.min) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) | None => Err(ViolationKind::below_minimum(&self.min, input)),
        }
    }
}

/// Creates a [`NotBefore`] check.
#[must_use]
pub const fn not_before<T>(min: T) -> NotBefore<T> {
    NotBefore::new(min)
}
