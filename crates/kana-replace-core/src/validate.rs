//! Search-term validation: length bound, then Hiragana/Katakana membership
//!
//! Membership is decided by the Unicode `Script` property, so marks that
//! Unicode assigns to `Common` (the prolonged sound mark `ー`, `。`, `、`)
//! are rejected along with Latin letters, digits and whitespace.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::config::Limits;
use crate::error::{KanaError, Result};
use crate::types::ValidationOutcome;

/// Matches any character that is neither Hiragana nor Katakana.
static NON_KANA: OnceLock<Regex> = OnceLock::new();

fn non_kana() -> &'static Regex {
    NON_KANA.get_or_init(|| {
        Regex::new(r"[^\p{sc=Hiragana}\p{sc=Katakana}]").expect("Invalid regex pattern")
    })
}

/// Check a search term against `limits`.
///
/// The empty string is accepted so a field can be cleared without an error.
pub fn check_search(input: &str, limits: &Limits) -> Result<()> {
    if input.is_empty() {
        return Ok(());
    }

    let count = input.chars().count();
    if count > limits.max_search_chars {
        return Err(KanaError::TooLong {
            max: limits.max_search_chars,
            actual: count,
        });
    }

    if let Some(m) = non_kana().find(input) {
        // find() returns a non-empty match, so there is a char at start()
        let offending = input[m.start()..].chars().next().unwrap_or_default();
        return Err(KanaError::WrongScript { offending });
    }

    Ok(())
}

/// Validate a search term with explicit limits.
pub fn validate_with(input: &str, limits: &Limits) -> ValidationOutcome {
    let result = check_search(input, limits);
    if let Err(err) = &result {
        debug!(kind = err.kind(), "search term rejected");
    }
    result.into()
}

/// Validate a search term with the default limits.
pub fn validate(input: &str) -> ValidationOutcome {
    validate_with(input, &Limits::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_valid() {
        let outcome = validate("");
        assert!(outcome.is_valid());
        assert_eq!(outcome.message(), "");
    }

    #[test]
    fn test_hiragana_and_katakana() {
        assert!(validate("ねこ").is_valid());
        assert!(validate("ネコ").is_valid());
        assert!(validate("ひらがなカタカナ").is_valid());
    }

    #[test]
    fn test_exactly_ten_chars() {
        assert!(validate("あいうえおかきくけこ").is_valid());
    }

    #[test]
    fn test_too_long_checked_before_script() {
        let outcome = validate("abcdefghijk");
        assert!(!outcome.is_valid());
        assert_eq!(outcome.message(), "10文字以内で入力してください");
    }

    #[test]
    fn test_wrong_script() {
        for input in ["abc", "ねこ1", "ね こ", "漢字", "ねこ。"] {
            let outcome = validate(input);
            assert!(!outcome.is_valid(), "{input:?} should be rejected");
            assert_eq!(outcome.message(), "ひらがなまたはカタカナのみ入力できます");
        }
    }

    #[test]
    fn test_script_property_not_extensions() {
        // U+30FC is Script=Common even though it only appears in kana text
        let outcome = validate("ラーメン");
        assert!(!outcome.is_valid());
        assert_eq!(outcome.message(), "ひらがなまたはカタカナのみ入力できます");
        assert_eq!(
            check_search("ラーメン", &Limits::default()).unwrap_err(),
            KanaError::WrongScript { offending: 'ー' }
        );

        // halfwidth forms are Script=Katakana
        assert!(validate("ｶﾀｶﾅ").is_valid());
    }

    #[test]
    fn test_offending_char_reported() {
        let err = check_search("ねこX", &Limits::default()).unwrap_err();
        assert_eq!(err, KanaError::WrongScript { offending: 'X' });
    }

    #[test]
    fn test_counts_codepoints_not_bytes() {
        // 10 kana are 30 bytes in UTF-8
        let input = "アイウエオカキクケコ";
        assert_eq!(input.len(), 30);
        assert!(check_search(input, &Limits::default()).is_ok());
    }

    #[test]
    fn test_custom_limit() {
        let limits = Limits {
            max_search_chars: 2,
            ..Limits::default()
        };
        let outcome = validate_with("ねこだ", &limits);
        assert_eq!(outcome.message(), "2文字以内で入力してください");
    }
}
