//! Outcome records handed back to the host

use serde::Serialize;

use crate::error::KanaError;

/// Result of validating a search term.
///
/// `message` is empty exactly when the input is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    #[serde(rename = "isValid")]
    valid: bool,
    message: String,
}

impl ValidationOutcome {
    /// Accepted input
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// Rejected input, carrying the error's user-facing message
    pub fn rejected(err: &KanaError) -> Self {
        Self {
            valid: false,
            message: err.to_string(),
        }
    }

    /// Whether the input passed validation
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// User-facing message; empty when valid
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<crate::Result<()>> for ValidationOutcome {
    fn from(result: crate::Result<()>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(err) => Self::rejected(&err),
        }
    }
}

/// Result of a substitution request.
///
/// `error` is non-empty exactly when no substitution took place; `text` is
/// then the untouched source (or empty for an arity failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionOutcome {
    #[serde(rename = "displayText")]
    text: String,
    error: String,
}

impl SubstitutionOutcome {
    /// Successful substitution (or pass-through)
    pub fn completed(text: String) -> Self {
        Self {
            text,
            error: String::new(),
        }
    }

    /// Aborted substitution: `text` is returned as given
    pub fn failed(text: impl Into<String>, err: &KanaError) -> Self {
        Self {
            text: text.into(),
            error: err.to_string(),
        }
    }

    /// Resulting text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// User-facing error; empty on success
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether an error was reported
    pub fn is_err(&self) -> bool {
        !self.error.is_empty()
    }

    /// Consume the outcome, keeping the text
    pub fn into_text(self) -> String {
        self.text
    }
}
