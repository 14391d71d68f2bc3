//! Case-folding helpers shared by the index and the query engine.
//!
//! Matching is case-insensitive; diacritic folding is out of scope because
//! the source datasets carry ASCII-normalised names.

/// Trim and lowercase a query or name for comparison.
pub(crate) fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split a folded name into its whitespace tokens.
///
/// A contiguous, whitespace-free substring of a folded name is always a
/// substring of one of these tokens, which is what lets single-token queries
/// resolve through the token index.
pub(crate) fn tokens(folded: &str) -> impl Iterator<Item = &str> {
    folded.split_whitespace()
}
