//! Per-keystroke input sanitization.
//!
//! The sanitizer runs on every input change and never interrupts typing: an
//! update that violates input policy is dropped and the previous value is
//! kept, no error is raised.
//!
//! # Normalization Rules
//!
//! 1. **Leading whitespace**: removed
//! 2. **Whitespace runs**: any run of two or more whitespace characters becomes one space
//! 3. **First character**: a single non-letter character is refused (except for `link`)
//! 4. **Length**: values longer than [`Field::input_max_len`] are refused

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::Field;

static LEADING_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Normalizes whitespace without applying any acceptance policy.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_whitespace("   hello   world"), "hello world");
/// assert_eq!(normalize_whitespace("a\t\nb"), "a b");
/// ```
pub fn normalize_whitespace(raw: &str) -> String {
    let trimmed = LEADING_WHITESPACE.replace(raw, "");
    WHITESPACE_RUN.replace_all(&trimmed, " ").into_owned()
}

/// Normalizes `raw` for `field` and applies the input policy.
///
/// Returns `None` when the update is refused.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(apply(Field::Title, "  My  App").as_deref(), Some("My App"));
/// // A digit cannot start a title
/// assert_eq!(apply(Field::Title, "7"), None);
/// // Links are exempt from the first-character rule
/// assert_eq!(apply(Field::Link, "h").as_deref(), Some("h"));
/// ```
pub fn apply(field: Field, raw: &str) -> Option<String> {
    let normalized = normalize_whitespace(raw);

    if refuses_first_char(field, &normalized) {
        tracing::trace!(%field, "input refused: must start with a letter");
        return None;
    }

    if let Some(max) = field.input_max_len()
        && normalized.chars().count() > max
    {
        tracing::trace!(%field, max, "input refused: too long");
        return None;
    }

    Some(normalized)
}

/// Computes the next candidate for `field` from the previous candidate and the
/// raw input.
///
/// Returns `previous` unchanged when the normalized input is refused.
pub fn sanitize(field: Field, previous: &str, raw: &str) -> String {
    apply(field, raw).unwrap_or_else(|| previous.to_string())
}

fn refuses_first_char(field: Field, normalized: &str) -> bool {
    if field == Field::Link {
        return false;
    }

    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(only), None) => !only.is_ascii_alphabetic(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_whitespace() {
        assert_eq!(sanitize(Field::Title, "", "   My App"), "My App");
        assert_eq!(sanitize(Field::Title, "", "\t\nMy App"), "My App");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(sanitize(Field::Title, "", "My    App"), "My App");
        assert_eq!(sanitize(Field::Description, "", "a\t\tb  c"), "a b c");
        assert_eq!(sanitize(Field::Link, "", "https://x.y/a  b"), "https://x.y/a b");
        assert_eq!(sanitize(Field::Pitch, "", "Line one\n\nLine two"), "Line one Line two");
    }

    #[test]
    fn test_keeps_single_trailing_space() {
        assert_eq!(sanitize(Field::Title, "My", "My "), "My ");
        assert_eq!(sanitize(Field::Title, "My ", "My  "), "My ");
    }

    #[test]
    fn test_refuses_non_letter_first_char() {
        for field in [
            Field::Title,
            Field::Description,
            Field::Category,
            Field::Pitch,
        ] {
            assert_eq!(sanitize(field, "", "1"), "");
            assert_eq!(sanitize(field, "", "#"), "");
            assert_eq!(sanitize(field, "", "  9"), "");
            assert_eq!(sanitize(field, "", "é"), "");
        }
    }

    #[test]
    fn test_refusal_keeps_previous_value() {
        assert_eq!(sanitize(Field::Title, "A", "1"), "A");
    }

    #[test]
    fn test_apply_reports_refusal() {
        assert_eq!(apply(Field::Title, "1"), None);
        assert_eq!(apply(Field::Title, &"t".repeat(101)), None);
        assert_eq!(apply(Field::Title, "  My   App").as_deref(), Some("My App"));
        assert_eq!(apply(Field::Link, "1").as_deref(), Some("1"));
        assert_eq!(apply(Field::Title, "").as_deref(), Some(""));
    }

    #[test]
    fn test_refusal_independent_of_previous() {
        // A refused value stays refused even if the form already holds it
        assert_eq!(apply(Field::Title, "1"), None);
        assert_eq!(sanitize(Field::Title, "1", "1"), "1");
    }

    #[test]
    fn test_accepts_letter_first_char() {
        assert_eq!(sanitize(Field::Title, "", "M"), "M");
        assert_eq!(sanitize(Field::Category, "", "  t"), "t");
    }

    #[test]
    fn test_link_exempt_from_first_char_rule() {
        assert_eq!(sanitize(Field::Link, "", "/"), "/");
        assert_eq!(sanitize(Field::Link, "", "8"), "8");
    }

    #[test]
    fn test_longer_values_skip_first_char_rule() {
        // Only a single-character value is checked; the validator covers the rest.
        assert_eq!(sanitize(Field::Title, "", "1A"), "1A");
    }

    #[test]
    fn test_clearing_a_field_is_allowed() {
        assert_eq!(sanitize(Field::Title, "M", ""), "");
        assert_eq!(sanitize(Field::Title, "M", "   "), "");
    }

    #[test]
    fn test_title_max_length() {
        let at_limit = format!("A{}", "b".repeat(99));
        assert_eq!(sanitize(Field::Title, "", &at_limit), at_limit);

        let over_limit = format!("A{}", "b".repeat(100));
        assert_eq!(sanitize(Field::Title, &at_limit, &over_limit), at_limit);
    }

    #[test]
    fn test_description_and_category_max_length() {
        let description = "d".repeat(501);
        assert_eq!(sanitize(Field::Description, "prev", &description), "prev");
        assert_eq!(sanitize(Field::Description, "", &"d".repeat(500)), "d".repeat(500));

        let category = "c".repeat(21);
        assert_eq!(sanitize(Field::Category, "prev", &category), "prev");
        assert_eq!(sanitize(Field::Category, "", &"c".repeat(20)), "c".repeat(20));
    }

    #[test]
    fn test_length_measured_after_normalization() {
        let padded = format!("{}{}", " ".repeat(10), "t".repeat(100));
        assert_eq!(sanitize(Field::Title, "", &padded), "t".repeat(100));
    }

    #[test]
    fn test_link_and_pitch_are_uncapped() {
        let long_link = format!("https://example.com/{}", "a".repeat(2000));
        assert_eq!(sanitize(Field::Link, "", &long_link), long_link);

        let long_pitch = "p".repeat(10_000);
        assert_eq!(sanitize(Field::Pitch, "", &long_pitch), long_pitch);
    }

    #[test]
    fn test_length_counts_characters() {
        let title = format!("A{}", "ü".repeat(99));
        assert_eq!(sanitize(Field::Title, "", &title), title);
    }
}
