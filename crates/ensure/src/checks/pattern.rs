//! Regular expression check
//!
//! [`MatchMode::Full`] (the default) requires the pattern to match the whole
//! string: the parsed pattern is anchored between `\A` and `\z` before it is
//! compiled. [`MatchMode::Search`] passes when the pattern matches anywhere in
//! the string.

use std::fmt::Display;

use regex::Regex;
use regex_automata::meta;
use regex_syntax::hir::{Hir, Look};

use crate::ViolationKind;
use crate::foundation::Check;

/// How a pattern has to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// The whole string must match.
    #[default]
    Full,
    /// Any substring may match.
    Search,
}

/// Passes when a string matches a regular expression.
///
/// # Examples
///
/// ```
/// use ensured_outcomes::checks::{MatchMode, MatchesPattern};
/// use ensured_outcomes::foundation::Check;
///
/// let full = MatchesPattern::new("[a-z]+[0-9]").unwrap();
/// assert!(full.check("abc1").is_ok());
/// assert!(full.check("abc12").is_err());
///
/// let search = MatchesPattern::with_mode("[a-z]+[0-9]", MatchMode::Search).unwrap();
/// assert!(search.check("abc12").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    matcher: Matcher,
    pattern: String,
    mode: MatchMode,
}

#[derive(Debug, Clone)]
enum Matcher {
    Search(Regex),
    Full(meta::Regex),
}

impl Matcher {
    fn is_match(&self, input: &str) -> bool {
        match self {
            Matcher::Search(regex) => regex.is_match(input),
            Matcher::Full(regex) => regex.is_match(input),
        }
    }
}

fn invalid_pattern(pattern: &str, err: impl Display) -> ViolationKind {
    ViolationKind::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: err.to_string(),
    }
}

impl MatchesPattern {
    /// Compiles `pattern` with full-match semantics.
    pub fn new(pattern: &str) -> Result<Self, ViolationKind> {
        Self::with_mode(pattern, MatchMode::Full)
    }

    /// Compiles `pattern` with an explicit [`MatchMode`].
    ///
    /// Fails with [`ViolationKind::InvalidPattern`] if `pattern` is not a
    /// valid regular expression on its own.
    pub fn with_mode(pattern: &str, mode: MatchMode) -> Result<Self, ViolationKind> {
        let raw = Regex::new(pattern).map_err(|err| invalid_pattern(pattern, err))?;
        let matcher = match mode {
            MatchMode::Search => Matcher::Search(raw),
            MatchMode::Full => Matcher::Full(compile_anchored(pattern)?),
        };

        Ok(Self {
            matcher,
            pattern: pattern.to_owned(),
            mode,
        })
    }

    /// The pattern as supplied by the caller.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The match mode in effect.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }
}

/// Anchors the parsed pattern at both ends, leaving its text untouched so
/// flags and comments inside it keep their meaning.
fn compile_anchored(pattern: &str) -> Result<meta::Regex, ViolationKind> {
    let hir = regex_syntax::parse(pattern).map_err(|err| invalid_pattern(pattern, err))?;
    let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
    meta::Regex::builder()
        .build_from_hir(&anchored)
        .map_err(|err| invalid_pattern(pattern, err))
}

impl Check for MatchesPattern {
    type Input = str;

    fn check(&self, input: &str) -> Result<(), ViolationKind> {
        if self.matcher.is_match(input) {
            Ok(())
        } else {
            Err(ViolationKind::PatternMismatch {
                pattern: self.pattern.clone(),
            })
        }
    }
}
