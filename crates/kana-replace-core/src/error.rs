//! Error types for kana validation and substitution

use thiserror::Error;

/// Result type alias for kana-replace operations
pub type Result<T> = std::result::Result<T, KanaError>;

/// Message reported by the boundary adapter on an arity mismatch.
pub const INVALID_ARGUMENTS: &str = "Invalid arguments";

/// Main error type for kana-replace.
///
/// The `Display` text of each variant is the message shown to the end user,
/// so it is copied verbatim into outcome records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KanaError {
    /// Search term longer than the configured bound
    #[error("{max}文字以内で入力してください")]
    TooLong {
        /// Configured bound in codepoints
        max: usize,
        /// Codepoint count of the rejected input
        actual: usize,
    },

    /// Search term contains a character outside Hiragana/Katakana
    #[error("ひらがなまたはカタカナのみ入力できます")]
    WrongScript {
        /// First character that failed the script check
        offending: char,
    },

    /// Replacement text longer than the configured bound
    #[error("{max}文字以内で入力してください")]
    ReplacementTooLong {
        /// Configured bound in codepoints
        max: usize,
        /// Codepoint count of the rejected replacement
        actual: usize,
    },

    /// Boundary adapter received the wrong number of arguments
    #[error("Invalid arguments")]
    InvalidArgumentCount {
        /// Arity of the entry point
        expected: usize,
        /// Number of arguments supplied
        actual: usize,
    },

    /// Host argument could not be converted to a string
    #[error("Invalid arguments")]
    UncoercibleArgument {
        /// Zero-based position of the argument
        position: usize,
    },

    /// Limits configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl KanaError {
    /// Stable identifier of the error kind, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TooLong { .. } => "TooLong",
            Self::WrongScript { .. } => "WrongScript",
            Self::ReplacementTooLong { .. } => "ReplacementTooLong",
            Self::InvalidArgumentCount { .. } => "InvalidArgumentCount",
            Self::UncoercibleArgument { .. } => "UncoercibleArgument",
            Self::InvalidConfig(_) => "InvalidConfig",
        }
    }
}

impl From<serde_json::Error> for KanaError {
    fn from(err: serde_json::Error) -> Self {
        KanaError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_follow_bounds() {
        let err = KanaError::TooLong { max: 10, actual: 11 };
        assert_eq!(err.to_string(), "10文字以内で入力してください");

        let err = KanaError::ReplacementTooLong { max: 30, actual: 31 };
        assert_eq!(err.to_string(), "30文字以内で入力してください");
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = KanaError::InvalidArgumentCount {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), INVALID_ARGUMENTS);
        assert_eq!(err.kind(), "InvalidArgumentCount");

        let err = KanaError::UncoercibleArgument { position: 0 };
        assert_eq!(err.to_string(), INVALID_ARGUMENTS);
    }
}
