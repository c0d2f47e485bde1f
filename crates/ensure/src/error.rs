//! Error types for failed argument checks
//!
//! Every guard in this crate fails with the same type, [`ArgumentViolation`].
//! What exactly went wrong is described by its [`ViolationKind`], so callers
//! can handle one error category and still inspect the specifics.

use std::borrow::Cow;
use std::fmt::Display;

// ============================================================================
// VIOLATION KIND
// ============================================================================

/// The reason an argument was rejected.
///
/// Variants carry the bound, pattern or actual value that explains the
/// failure. Numeric and date-like values are stored pre-rendered so the kind
/// stays `Clone + Eq` regardless of the checked type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "code", rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ViolationKind {
    /// The value was absent.
    #[error("Value must not be null")]
    Null,

    /// The string had zero length.
    #[error("String must not be empty")]
    Empty,

    /// The string contained only whitespace characters.
    #[error("String must not consist only of whitespace")]
    Whitespace,

    /// The string length fell outside the inclusive bounds.
    #[error("String length must be between {minimum} and {maximum}, got {actual}")]
    LengthOutOfRange {
        /// Smallest accepted length.
        minimum: usize,
        /// Largest accepted length.
        maximum: usize,
        /// Measured length of the rejected value.
        actual: usize,
    },

    /// The string did not match the pattern.
    #[error("String must match pattern '{pattern}'")]
    PatternMismatch {
        /// The pattern as supplied by the caller.
        pattern: String,
    },

    /// The value was less than the minimum (or not comparable with it).
    #[error("Value {actual} must not be less than {minimum}")]
    BelowMinimum {
        /// The minimum accepted value.
        minimum: String,
        /// The rejected value.
        actual: String,
    },

    /// The length bounds themselves were inverted.
    #[error("Minimum length {minimum} exceeds maximum length {maximum}")]
    InvalidBounds {
        /// Requested minimum length.
        minimum: usize,
        /// Requested maximum length.
        maximum: usize,
    },

    /// The pattern is not a valid regular expression.
    #[error("Pattern '{pattern}' is not a valid regular expression: {reason}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// Parser diagnostic from the regex engine.
        reason: String,
    },
}

impl ViolationKind {
    /// Builds a [`ViolationKind::BelowMinimum`] from any displayable pair.
    pub fn below_minimum<T: Display + ?Sized>(minimum: &T, actual: &T) -> Self {
        Self::BelowMinimum {
            minimum: minimum.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Stable snake_case code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Empty => "empty",
            Self::Whitespace => "whitespace",
            Self::LengthOutOfRange { .. } => "length_out_of_range",
            Self::PatternMismatch { .. } => "pattern_mismatch",
            Self::BelowMinimum { .. } => "below_minimum",
            Self::InvalidBounds { .. } => "invalid_bounds",
            Self::InvalidPattern { .. } => "invalid_pattern",
        }
    }

    /// Diagnostic parameters as ordered key-value pairs.
    ///
    /// Keys are `min`, `max`, `actual`, `pattern` and `reason`, depending on
    /// the variant. Unit variants have none.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        match self {
            Self::Null | Self::Empty | Self::Whitespace => Vec::new(),
            Self::LengthOutOfRange {
                minimum,
                maximum,
                actual,
            } => vec![
                ("min", Cow::Owned(minimum.to_string())),
                ("max", Cow::Owned(maximum.to_string())),
                ("actual", Cow::Owned(actual.to_string())),
            ],
            Self::PatternMismatch { pattern } => vec![("pattern", Cow::Borrowed(pattern.as_str()))],
            Self::BelowMinimum { minimum, actual } => vec![
                ("min", Cow::Borrowed(minimum.as_str())),
                ("actual", Cow::Borrowed(actual.as_str())),
            ],
            Self::InvalidBounds { minimum, maximum } => vec![
                ("min", Cow::Owned(minimum.to_string())),
                ("max", Cow::Owned(maximum.to_string())),
            ],
            Self::InvalidPattern { pattern, reason } => vec![
                ("pattern", Cow::Borrowed(pattern.as_str())),
                ("reason", Cow::Borrowed(reason.as_str())),
            ],
        }
    }
}

// ============================================================================
// ARGUMENT VIOLATION
// ============================================================================

/// A rejected argument: which parameter, and why.
///
/// The parameter name is whatever label the caller passed to the guard,
/// kept verbatim.
///
/// # Examples
///
/// ```
/// use ensured_outcomes::{ArgumentViolation, ViolationKind};
///
/// let error = ArgumentViolation::new("username", ViolationKind::Empty);
/// assert_eq!(error.parameter, "username");
/// assert_eq!(error.code(), "empty");
/// assert_eq!(error.to_string(), "[username] empty: String must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("[{parameter}] {}: {kind}", .kind.code())]
pub struct ArgumentViolation {
    /// Label of the offending argument, as supplied by the caller.
    pub parameter: String,

    /// What was wrong with it.
    pub kind: ViolationKind,
}

impl ArgumentViolation {
    /// Creates a violation for `parameter`.
    pub fn new(parameter: impl Into<String>, kind: ViolationKind) -> Self {
        let parameter = parameter.into();
        tracing::debug!(
            target: "ensured_outcomes",
            parameter = %parameter,
            code = kind.code(),
            "argument check failed"
        );
        Self { parameter, kind }
    }

    /// Stable snake_case code of the underlying [`ViolationKind`].
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Looks up a diagnostic parameter by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<Cow<'_, str>> {
        self.kind
            .params()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Converts the violation to a JSON object.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .kind
            .params()
            .into_iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.into_owned())))
            .collect();

        json!({
            "parameter": self.parameter,
            "code": self.code(),
            "message": self.kind.to_string(),
            "params": params,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
