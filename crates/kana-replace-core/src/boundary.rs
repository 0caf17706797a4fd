//! Host-agnostic boundary adapter
//!
//! Hosts hand over an untyped argument list. Bindings coerce each argument
//! to a string first; this module then enforces the fixed arity of each
//! entry point before dispatching to the typed functions.

use tracing::debug;

use crate::config::Limits;
use crate::error::{KanaError, Result};
use crate::replace::replace_with;
use crate::types::{SubstitutionOutcome, ValidationOutcome};
use crate::validate::validate_with;

/// Arity of the validate entry point: `(input)`
pub const VALIDATE_ARITY: usize = 1;

/// Arity of the replace entry point: `(search, replacement, source)`
pub const REPLACE_ARITY: usize = 3;

fn expect_arity<S>(args: &[S], expected: usize) -> Result<()> {
    if args.len() != expected {
        debug!(expected, actual = args.len(), "wrong argument count");
        return Err(KanaError::InvalidArgumentCount {
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

/// Validator and replacer bound to a set of [`Limits`].
///
/// Holds no mutable state, so a single instance can serve any number of
/// calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KanaReplacer {
    limits: Limits,
}

impl KanaReplacer {
    /// Create a replacer, rejecting unusable limits.
    pub fn new(limits: Limits) -> Result<Self> {
        limits.validate()?;
        Ok(Self { limits })
    }

    /// Active limits
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Validate a search term.
    pub fn validate(&self, input: &str) -> ValidationOutcome {
        validate_with(input, &self.limits)
    }

    /// Substitute every occurrence of `search` in `source`.
    pub fn replace(&self, search: &str, replacement: &str, source: &str) -> SubstitutionOutcome {
        replace_with(search, replacement, source, &self.limits)
    }

    /// Validate from a raw argument list: `[input]`.
    pub fn validate_entry<S: AsRef<str>>(&self, args: &[S]) -> ValidationOutcome {
        match expect_arity(args, VALIDATE_ARITY) {
            Ok(()) => self.validate(args[0].as_ref()),
            Err(err) => ValidationOutcome::rejected(&err),
        }
    }

    /// Replace from a raw argument list: `[search, replacement, source]`.
    ///
    /// An arity failure yields empty text, since there is no trustworthy
    /// source to echo back.
    pub fn replace_entry<S: AsRef<str>>(&self, args: &[S]) -> SubstitutionOutcome {
        match expect_arity(args, REPLACE_ARITY) {
            Ok(()) => self.replace(args[0].as_ref(), args[1].as_ref(), args[2].as_ref()),
            Err(err) => SubstitutionOutcome::failed(String::new(), &err),
        }
    }
}

/// [`KanaReplacer::validate_entry`] with the default limits.
pub fn validate_entry<S: AsRef<str>>(args: &[S]) -> ValidationOutcome {
    KanaReplacer::default().validate_entry(args)
}

/// [`KanaReplacer::replace_entry`] with the default limits.
pub fn replace_entry<S: AsRef<str>>(args: &[S]) -> SubstitutionOutcome {
    KanaReplacer::default().replace_entry(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entry_arity() {
        let none: [&str; 0] = [];
        let outcome = validate_entry(&none);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.message(), "Invalid arguments");

        let outcome = validate_entry(&["ねこ", "いぬ"]);
        assert_eq!(outcome.message(), "Invalid arguments");
    }

    #[test]
    fn test_validate_entry_dispatches() {
        assert!(validate_entry(&["ねこ"]).is_valid());
        assert!(!validate_entry(&[String::from("cat")]).is_valid());
    }

    #[test]
    fn test_replace_entry_arity() {
        let outcome = replace_entry(&["a", "b"]);
        assert_eq!(outcome.text(), "");
        assert_eq!(outcome.error(), "Invalid arguments");

        let outcome = replace_entry(&["a", "b", "c", "d"]);
        assert_eq!(outcome.error(), "Invalid arguments");
    }

    #[test]
    fn test_replace_entry_argument_order() {
        let outcome = replace_entry(&["ねこ", "いぬ", "ねこがねこを見る"]);
        assert_eq!(outcome.text(), "いぬがいぬを見る");
        assert_eq!(outcome.error(), "");
    }

    #[test]
    fn test_custom_limits() {
        let replacer = KanaReplacer::new(Limits {
            max_search_chars: 3,
            max_replacement_chars: 2,
        })
        .unwrap();

        assert!(!replacer.validate("あいうえ").is_valid());
        let outcome = replacer.replace("あ", "xyz", "あい");
        assert_eq!(outcome.error(), "2文字以内で入力してください");
        assert_eq!(outcome.text(), "あい");
    }

    #[test]
    fn test_rejects_zero_limits() {
        let limits = Limits {
            max_search_chars: 0,
            ..Limits::default()
        };
        assert!(KanaReplacer::new(limits).is_err());
    }
}
