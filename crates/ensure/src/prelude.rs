//! Prelude module for convenient imports.
//!
//! `use ensured_outcomes::prelude::*;` brings in the guard functions (via
//! the [`ensure`] module), the error types, the check traits, and the
//! reusable checks.

pub use crate::ensure;

pub use crate::error::{ArgumentViolation, ViolationKind};

pub use crate::foundation::{AsText, Check, CheckTextExt};

pub use crate::checks::{
    LengthBetween, LengthMode, MatchMode, MatchesPattern, NotBefore, NotEmpty, NotWhitespace,
    not_before, not_empty, not_whitespace,
};
