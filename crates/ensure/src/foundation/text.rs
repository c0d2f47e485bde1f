//! Nullable string candidates
//!
//! [`AsText`] lets one guard accept `&str`, `String`, `Cow<str>`,
//! `Box<str>` and `Option` of any of those without explicit conversion
//! by the caller. `None` is the null candidate.

use std::borrow::Cow;

/// A value that may or may not hold a string.
pub trait AsText {
    /// Returns the string, or `None` when the candidate is null.
    fn as_text(&self) -> Option<&str>;
}

impl AsText for str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsText for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsText for Box<str> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl AsText for Cow<'_, str> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl<T: AsText + ?Sized> AsText for &T {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: AsText> AsText for Option<T> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_values() {
        assert_eq!("abc".as_text(), Some("abc"));
        assert_eq!(String::from("abc").as_text(), Some("abc"));
        assert_eq!(Box::<str>::from("abc").as_text(), Some("abc"));
        assert_eq!(Cow::Borrowed("abc").as_text(), Some("abc"));
        assert_eq!(Some("abc").as_text(), Some("abc"));
        assert_eq!(Some(String::from("abc")).as_text(), Some("abc"));
    }

    #[test]
    fn test_null_values() {
        assert_eq!(None::<&str>.as_text(), None);
        assert_eq!(None::<String>.as_text(), None);
        assert_eq!(Some(None::<&str>).as_text(), None);
    }
}
