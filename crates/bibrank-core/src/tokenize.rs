//! Query tokenization and text normalization
//!
//! Terms and field text go through the same normalization so every match
//! tier compares like with like: lowercase, diacritics folded to ASCII,
//! split on runs of non-alphanumeric characters.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::SearchError;

/// Tokenize a raw query into normalized terms.
///
/// Fails with [`SearchError::InvalidQuery`] if the query is empty or
/// whitespace-only after trimming. Duplicate terms are preserved in
/// order: a repeated term contributes once per occurrence, which lets a
/// caller emphasize a word.
pub fn tokenize(query: &str) -> Result<Vec<String>, SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::InvalidQuery);
    }
    Ok(split_normalized(query))
}

/// Fold a string to lowercase ASCII alphanumerics and spaces.
///
/// NFKD decomposition separates combining marks, which are dropped so an
/// accented letter folds into its base letter instead of splitting the
/// token. Everything else non-alphanumeric becomes a separator.
pub fn fold(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

/// Normalize and split into non-empty tokens.
pub fn split_normalized(text: &str) -> Vec<String> {
    fold(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Normalize a whole string into a single comparable form, collapsing
/// token boundaries to single spaces. Used for exact-match comparison.
pub fn normalize(text: &str) -> String {
    split_normalized(text).join(" ")
}
