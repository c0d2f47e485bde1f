//! Presence checks for strings

use crate::ViolationKind;

crate::check! {
    /// Passes when a string has at least one character.
    ///
    /// Whitespace counts as content here; see [`NotWhitespace`].
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    violation(input) { ViolationKind::Empty }
    fn not_empty();
}

crate::check! {
    /// Passes when a string has at least one non-whitespace character.
    ///
    /// Whitespace follows the Unicode `White_Space` property
    /// ([`char::is_whitespace`]). An empty string reports
    /// [`ViolationKind::Empty`], a blank one [`ViolationKind::Whitespace`].
    pub NotWhitespace for str;
    rule(input) { input.chars().any(|c| !c.is_whitespace()) }
    violation(input) {
        if input.is_empty() {
            ViolationKind::Empty
        } else {
            ViolationKind::Whitespace
        }
    }
    fn not_whitespace();
}
