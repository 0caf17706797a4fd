//! Length bounds applied by the validator and replacer

use serde::{Deserialize, Serialize};

use crate::error::{KanaError, Result};

/// Default bound on the search term, in codepoints
pub const DEFAULT_MAX_SEARCH_CHARS: usize = 10;

/// Default bound on the replacement text, in codepoints
pub const DEFAULT_MAX_REPLACEMENT_CHARS: usize = 30;

/// Length limits for the two user-editable fields.
///
/// All bounds count Unicode scalar values (`str::chars`), never bytes or
/// grapheme clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Limits {
    /// Maximum codepoints accepted for the search term
    pub max_search_chars: usize,
    /// Maximum codepoints accepted for the replacement text
    pub max_replacement_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_search_chars: DEFAULT_MAX_SEARCH_CHARS,
            max_replacement_chars: DEFAULT_MAX_REPLACEMENT_CHARS,
        }
    }
}

impl Limits {
    /// Reject bounds that would make every non-empty input invalid.
    pub fn validate(&self) -> Result<()> {
        if self.max_search_chars == 0 {
            return Err(KanaError::InvalidConfig(
                "maxSearchChars must be greater than 0".to_string(),
            ));
        }
        if self.max_replacement_chars == 0 {
            return Err(KanaError::InvalidConfig(
                "maxReplacementChars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from JSON; missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let limits: Limits = serde_json::from_str(json)?;
        limits.validate()?;
        Ok(limits)
    }
}
