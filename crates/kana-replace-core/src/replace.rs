//! Bounded literal substitution

use tracing::{debug, trace};

use crate::config::Limits;
use crate::error::{KanaError, Result};
use crate::types::SubstitutionOutcome;
use crate::validate::check_search;

/// Check the replacement text length. The replacement is free-form text, so
/// only the bound applies.
pub fn check_replacement(replacement: &str, limits: &Limits) -> Result<()> {
    let count = replacement.chars().count();
    if count > limits.max_replacement_chars {
        return Err(KanaError::ReplacementTooLong {
            max: limits.max_replacement_chars,
            actual: count,
        });
    }
    Ok(())
}

/// Replace every occurrence of `search` in `source` with `replacement`.
///
/// An empty `search` or `source` passes `source` through unchanged. Matching
/// is literal and case-sensitive; after a match the scan resumes at its end,
/// so inserted text is never matched again.
pub fn substitute(
    search: &str,
    replacement: &str,
    source: &str,
    limits: &Limits,
) -> Result<String> {
    if search.is_empty() || source.is_empty() {
        return Ok(source.to_owned());
    }

    check_search(search, limits)?;
    check_replacement(replacement, limits)?;

    let text = source.replace(search, replacement);
    trace!(
        source_chars = source.chars().count(),
        result_chars = text.chars().count(),
        "substitution applied"
    );
    Ok(text)
}

/// Substitute with explicit limits, reporting failures as data.
pub fn replace_with(
    search: &str,
    replacement: &str,
    source: &str,
    limits: &Limits,
) -> SubstitutionOutcome {
    match substitute(search, replacement, source, limits) {
        Ok(text) => SubstitutionOutcome::completed(text),
        Err(err) => {
            debug!(kind = err.kind(), "substitution skipped");
            SubstitutionOutcome::failed(source, &err)
        }
    }
}

/// Substitute with the default limits.
pub fn replace(search: &str, replacement: &str, source: &str) -> SubstitutionOutcome {
    replace_with(search, replacement, source, &Limits::default())
}
