//! String length check
//!
//! By default length is measured in Unicode scalar values (chars).
//! [`LengthMode::Bytes`] counts UTF-8 bytes and [`LengthMode::Utf16`] counts
//! UTF-16 code units, which is what .NET and JavaScript report as a string's
//! length.

use crate::ViolationKind;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
    /// Count UTF-16 code units.
    Utf16,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Utf16 => input.encode_utf16().count(),
        }
    }
}

// ============================================================================
// LENGTH BETWEEN
// ============================================================================

crate::check! {
    /// Passes when a string's length lies within `min..=max`.
    ///
    /// Construction fails with [`ViolationKind::InvalidBounds`] when
    /// `min > max`. Fields are private, so inverted bounds cannot be built
    /// by hand either:
    ///
    /// ```compile_fail
    /// use ensured_outcomes::checks::{LengthBetween, LengthMode};
    ///
    /// let check = LengthBetween { min: 5, max: 1, mode: LengthMode::Chars };
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LengthBetween { min: usize, max: usize, mode: LengthMode } for str;
    rule(self, input) { (self.min..=self.max).contains(&self.mode.measure(input)) }
    violation(self, input) {
        ViolationKind::LengthOutOfRange {
            minimum: self.min,
            maximum: self.max,
            actual: self.mode.measure(input),
        }
    }
    new(min: usize, max: usize) -> ViolationKind { Self::with_mode(min, max, LengthMode::Chars) }
}

impl LengthBetween {
    /// Creates a length check that counts bytes.
    pub fn bytes(min: usize, max: usize) -> Result<Self, ViolationKind> {
        Self::with_mode(min, max, LengthMode::Bytes)
    }

    /// Creates a length check that counts UTF-16 code units.
    pub fn utf16(min: usize, max: usize) -> Result<Self, ViolationKind> {
        Self::with_mode(min, max, LengthMode::Utf16)
    }

    /// Creates a length check with an explicit [`LengthMode`].
    pub fn with_mode(min: usize, max: usize, mode: LengthMode) -> Result<Self, ViolationKind> {
        if min > max {
            return Err(ViolationKind::InvalidBounds {
                minimum: min,
                maximum: max,
            });
        }
        Ok(Self { min, max, mode })
    }

    /// Smallest accepted length (inclusive).
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest accepted length (inclusive).
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// How length is counted.
    #[must_use]
    pub fn mode(&self) -> LengthMode {
        self.mode
    }
}

// ============================================================================
// TESTS
// ============================================================================
