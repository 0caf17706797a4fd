//! # kana-replace core
//!
//! Validation of Hiragana/Katakana search terms and bounded literal
//! substitution, independent of any host runtime.
//!
//! - **Validator**: empty input passes; otherwise at most
//!   [`DEFAULT_MAX_SEARCH_CHARS`] codepoints, all of Hiragana or Katakana script
//! - **Replacer**: validates the search term, bounds the replacement at
//!   [`DEFAULT_MAX_REPLACEMENT_CHARS`] codepoints, then replaces every literal
//!   occurrence left to right
//! - **Boundary**: fixed-arity guards over raw host argument lists
//!
//! Failures never escape as `Err` from the public entry points; they are
//! reported inside [`ValidationOutcome`] and [`SubstitutionOutcome`].
//!
//! ## Example
//!
//! ```rust
//! use kana_replace_core::{replace, validate};
//!
//! assert!(validate("ねこ").is_valid());
//!
//! let outcome = replace("ねこ", "いぬ", "ねこがねこを見る");
//! assert_eq!(outcome.text(), "いぬがいぬを見る");
//! assert_eq!(outcome.error(), "");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod config;
pub mod error;
pub mod replace;
pub mod types;
pub mod validate;

// Re-exports
pub use boundary::{replace_entry, validate_entry, KanaReplacer, REPLACE_ARITY, VALIDATE_ARITY};
pub use config::{Limits, DEFAULT_MAX_REPLACEMENT_CHARS, DEFAULT_MAX_SEARCH_CHARS};
pub use error::{KanaError, Result, INVALID_ARGUMENTS};
pub use replace::{check_replacement, replace, replace_with, substitute};
pub use types::{SubstitutionOutcome, ValidationOutcome};
pub use validate::{check_search, validate, validate_with};
