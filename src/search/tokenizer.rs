//! Query tokenizer
//!
//! - Strips everything except ASCII letters, digits and whitespace
//! - Splits on single spaces
//! - Stems each word with the Porter stemmer

use once_cell::sync::Lazy;
use regex::Regex;

use super::stemmer::stem;

/// Characters removed from queries before splitting
static NON_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9\s]+").expect("static pattern is valid")
});

/// Remove punctuation, keeping letters, digits and whitespace
pub fn strip_punctuation(text: &str) -> String {
    NON_WORD.replace_all(text, "").into_owned()
}

/// Tokenize a search query into stems.
///
/// Empty pieces (empty query, punctuation-only query, repeated spaces) are
/// dropped, so such queries produce no tokens.
pub fn tokenize_query(query: &str) -> Vec<String> {
    strip_punctuation(query)
        .split(' ')
        .map(stem)
        .filter(|token| !token.is_empty())
        .collect()
}
