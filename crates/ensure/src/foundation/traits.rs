//! Core traits for argument checks

use crate::error::{ArgumentViolation, ViolationKind};
use crate::foundation::text::AsText;

// ============================================================================
// CORE CHECK TRAIT
// ============================================================================

/// A single rule that an argument must satisfy.
///
/// Implementations are pure: the same input always yields the same outcome,
/// and nothing about the input is retained.
///
/// # Examples
///
/// ```
/// use ensured_outcomes::foundation::Check;
/// use ensured_outcomes::ViolationKind;
///
/// struct Positive;
///
/// impl Check for Positive {
///     type Input = i64;
///
///     fn check(&self, input: &i64) -> Result<(), ViolationKind> {
///         if *input > 0 {
///             Ok(())
///         } else {
///             Err(ViolationKind::below_minimum(&1, input))
///         }
///     }
/// }
///
/// assert!(Positive.ensure(&4, "count").is_ok());
/// assert_eq!(Positive.ensure(&0, "count").unwrap_err().parameter, "count");
/// ```
pub trait Check {
    /// The type being checked (may be unsized, e.g. `str`).
    type Input: ?Sized;

    /// Evaluates the rule, describing the failure if there is one.
    fn check(&self, input: &Self::Input) -> Result<(), ViolationKind>;

    /// Evaluates the rule and labels any failure with `parameter_name`.
    fn ensure(&self, input: &Self::Input, parameter_name: &str) -> Result<(), ArgumentViolation> {
        self.check(input)
            .map_err(|kind| ArgumentViolation::new(parameter_name, kind))
    }
}

// ============================================================================
// TEXT EXTENSION TRAIT
// ============================================================================

/// Applies a string check to any [`AsText`] candidate.
///
/// A null candidate fails with [`ViolationKind::Null`] before the rule runs.
/// Automatically implemented for every `Check<Input = str>`.
pub trait CheckTextExt: Check<Input = str> {
    /// Ensures `value` is present and satisfies this check.
    fn ensure_text<S>(&self, value: &S, parameter_name: &str) -> Result<(), ArgumentViolation>
    where
        S: AsText + ?Sized,
    {
        match value.as_text() {
            Some(text) => self.ensure(text, parameter_name),
            None => Err(ArgumentViolation::new(parameter_name, ViolationKind::Null)),
        }
    }
}

impl<C: Check<Input = str> + ?Sized> CheckTextExt for C {}
