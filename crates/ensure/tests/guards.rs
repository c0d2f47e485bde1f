//! Integration tests for the guard functions.

use chrono::{NaiveDate, TimeZone, Utc};
use ensured_outcomes::prelude::*;
use pretty_assertions::assert_eq;
use std::borrow::Cow;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// NOT NULL
// ============================================================================

#[test]
fn not_null_accepts_some() {
    assert!(ensure::not_null(&Some("x"), "value").is_ok());
    assert!(ensure::not_null(&Some(0), "value").is_ok());
    assert!(ensure::not_null(&Some(Vec::<u8>::new()), "value").is_ok());
}

#[test]
fn not_null_rejects_none() {
    let error = ensure::not_null(&None::<u64>, "account_id").unwrap_err();
    assert_eq!(error.parameter, "account_id");
    assert_eq!(error.kind, ViolationKind::Null);
    assert_eq!(
        error.to_string(),
        "[account_id] null: Value must not be null"
    );
}

// ============================================================================
// NOT NULL OR EMPTY
// ============================================================================

#[test]
fn not_null_or_empty_accepts_content() {
    assert!(ensure::not_null_or_empty("a", "s").is_ok());
    assert!(ensure::not_null_or_empty(" ", "s").is_ok());
    assert!(ensure::not_null_or_empty(&String::from("abc"), "s").is_ok());
    assert!(ensure::not_null_or_empty(&Some("abc"), "s").is_ok());
    assert!(ensure::not_null_or_empty(&Cow::Borrowed("abc"), "s").is_ok());
}

#[test]
fn not_null_or_empty_rejects_empty_and_null() {
    let error = ensure::not_null_or_empty("", "title").unwrap_err();
    assert_eq!(error.kind, ViolationKind::Empty);
    assert_eq!(error.parameter, "title");

    let error = ensure::not_null_or_empty(&None::<String>, "title").unwrap_err();
    assert_eq!(error.kind, ViolationKind::Null);
    assert_eq!(error.parameter, "title");
}

// ============================================================================
// NOT NULL OR WHITESPACE
// ============================================================================

#[test]
fn not_null_or_whitespace_accepts_any_visible_char() {
    assert!(ensure::not_null_or_whitespace("a", "s").is_ok());
    assert!(ensure::not_null_or_whitespace("   a", "s").is_ok());
    assert!(ensure::not_null_or_whitespace("\t.\n", "s").is_ok());
}

#[test]
fn not_null_or_whitespace_rejects_blank() {
    assert_eq!(
        ensure::not_null_or_whitespace(&None::<&str>, "s")
            .unwrap_err()
            .kind,
        ViolationKind::Null
    );
    assert_eq!(
        ensure::not_null_or_whitespace("", "s").unwrap_err().kind,
        ViolationKind::Empty
    );
    assert_eq!(
        ensure::not_null_or_whitespace("   ", "s").unwrap_err().kind,
        ViolationKind::Whitespace
    );
}

// ============================================================================
// LENGTH BETWEEN
// ============================================================================

#[test]
fn length_between_within_bounds() {
    assert!(ensure::length_between("abc", 1, 5, "x").is_ok());
    assert!(ensure::length_between("abc", 3, 3, "x").is_ok());
}

#[test]
fn length_between_too_short() {
    let error = ensure::length_between("abc", 4, 5, "x").unwrap_err();
    assert_eq!(
        error.kind,
        ViolationKind::LengthOutOfRange {
            minimum: 4,
            maximum: 5,
            actual: 3,
        }
    );
    assert_eq!(
        error.to_string(),
        "[x] length_out_of_range: String length must be between 4 and 5, got 3"
    );
}

#[test]
fn length_between_too_long() {
    let error = ensure::length_between("abcdef", 1, 5, "x").unwrap_err();
    assert_eq!(error.param("actual").as_deref(), Some("6"));
    assert_eq!(error.param("max").as_deref(), Some("5"));
}

#[test]
fn length_between_rejects_null() {
    let error = ensure::length_between(&None::<&str>, 1, 5, "x").unwrap_err();
    assert_eq!(error.kind, ViolationKind::Null);
}

#[test]
fn length_between_counts_chars() {
    // four chars, twelve bytes
    assert!(ensure::length_between("\u{65e5}\u{672c}\u{8a9e}\u{6587}", 4, 4, "x").is_ok());
}

#[test]
fn length_between_rejects_inverted_bounds() {
    let error = ensure::length_between("abc", 5, 1, "x").unwrap_err();
    assert_eq!(
        error.kind,
        ViolationKind::InvalidBounds {
            minimum: 5,
            maximum: 1,
        }
    );
}

// ============================================================================
// MATCHES PATTERN
// ============================================================================

#[test]
fn matches_pattern_examples() {
    assert!(ensure::matches_pattern("abc123", "^[a-z]+[0-9]+$", "x").is_ok());

    let error = ensure::matches_pattern("123abc", "^[a-z]+[0-9]+$", "x").unwrap_err();
    assert_eq!(error.parameter, "x");
    assert_eq!(
        error.kind,
        ViolationKind::PatternMismatch {
            pattern: "^[a-z]+[0-9]+$".to_string(),
        }
    );
}

#[test]
fn matches_pattern_requires_full_match() {
    assert!(ensure::matches_pattern("abc1", "[a-z]+[0-9]", "x").is_ok());
    assert!(ensure::matches_pattern("abc12", "[a-z]+[0-9]", "x").is_err());
    assert!(ensure::matches_pattern("_abc1", "[a-z]+[0-9]", "x").is_err());
}

#[test]
fn matches_pattern_accepts_verbose_pattern_with_comment() {
    let pattern = "(?x)[a-z]+ # letters only";
    assert!(regex::Regex::new(pattern).is_ok());
    assert!(ensure::matches_pattern("abc", pattern, "x").is_ok());

    let error = ensure::matches_pattern("abc1", pattern, "x").unwrap_err();
    assert_eq!(error.code(), "pattern_mismatch");
}

#[test]
fn matches_pattern_rejects_null() {
    let error = ensure::matches_pattern(&None::<String>, ".*", "x").unwrap_err();
    assert_eq!(error.kind, ViolationKind::Null);
}

#[test]
fn matches_pattern_reports_invalid_pattern() {
    let error = ensure::matches_pattern("abc", "(", "x").unwrap_err();
    assert_eq!(error.code(), "invalid_pattern");
    assert_eq!(error.param("pattern").as_deref(), Some("("));
    assert!(error.param("reason").is_some());
}

#[test]
fn reusable_pattern_check() {
    let check = MatchesPattern::new(r"\d{3}-\d{4}").unwrap();
    assert!(check.ensure_text("123-4567", "phone").is_ok());
    assert!(check.ensure_text("invalid", "phone").is_err());
    assert!(check.ensure_text("0123-4567", "phone").is_err());
}

// ============================================================================
// IN RANGE
// ============================================================================

#[test]
fn in_range_dates() {
    assert!(ensure::in_range(&date(2020, 1, 2), &date(2020, 1, 1), "x").is_ok());
    assert!(ensure::in_range(&date(2020, 1, 1), &date(2020, 1, 1), "x").is_ok());

    let error = ensure::in_range(&date(2020, 1, 1), &date(2020, 1, 2), "x").unwrap_err();
    assert_eq!(error.parameter, "x");
    assert_eq!(
        error.kind,
        ViolationKind::BelowMinimum {
            minimum: "2020-01-02".to_string(),
            actual: "2020-01-01".to_string(),
        }
    );
}

#[test]
fn in_range_date_times() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let earlier = Utc.with_ymd_and_hms(2024, 3, 1, 11, 59, 59).unwrap();

    assert!(ensure::in_range(&start, &start, "starts_at").is_ok());
    let error = ensure::in_range(&earlier, &start, "starts_at").unwrap_err();
    assert_eq!(error.code(), "below_minimum");
}

#[test]
fn in_range_numbers() {
    assert!(ensure::in_range(&10_u32, &1, "n").is_ok());
    assert!(ensure::in_range(&0_u32, &1, "n").is_err());
    assert!(ensure::in_range(&f64::NAN, &0.0, "n").is_err());
}

// ============================================================================
// FAIL-FAST CHAINING
// ============================================================================

fn create_user(name: Option<&str>, born: NaiveDate) -> Result<(), ArgumentViolation> {
    ensure::not_null_or_whitespace(&name, "name")?;
    ensure::length_between(&name, 2, 32, "name")?;
    ensure::in_range(&born, &date(1900, 1, 1), "born")?;
    Ok(())
}

#[test]
fn first_failure_wins() {
    assert!(create_user(Some("Ada"), date(1815, 12, 10)).is_err());
    assert!(create_user(Some("Ada"), date(1915, 12, 10)).is_ok());

    let error = create_user(None, date(1815, 12, 10)).unwrap_err();
    assert_eq!(error.parameter, "name");
    assert_eq!(error.kind, ViolationKind::Null);

    let error = create_user(Some("A"), date(1815, 12, 10)).unwrap_err();
    assert_eq!(error.parameter, "name");
    assert_eq!(error.code(), "length_out_of_range");
}

#[test]
fn violation_is_a_std_error() {
    fn boxed() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        ensure::not_null_or_empty("", "payload")?;
        Ok(())
    }

    let error = boxed().unwrap_err();
    assert_eq!(
        error.to_string(),
        "[payload] empty: String must not be empty"
    );
}
