//! Search result types

use serde::{Deserialize, Serialize};

/// One hit with its context window. Lives for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Text of the previous line, empty at the start of the corpus
    pub context_before: String,
    /// Matched line with the highlighted word wrapped in `<b>`
    pub highlighted_text: String,
    /// Text of the next line, empty at the end of the corpus
    pub context_after: String,
    pub play_name: String,
    pub line_number: String,
    pub speaker: String,
    pub line_type: String,
    pub score: usize,
}

/// Response body sent to the frontend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(rename = "HTML")]
    pub html: String,
    #[serde(rename = "numResults")]
    pub num_results: usize,
}

/// How query text is matched against lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Stemmed term overlap, ranked by score
    #[default]
    Stemmed,
    /// Case-insensitive substring match in corpus order
    Exact,
}

impl SearchMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "" | "stemmed" => Some(SearchMode::Stemmed),
            "exact" => Some(SearchMode::Exact),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_field_names() {
        let results = SearchResults {
            html: "<figure></figure>".to_string(),
            num_results: 1,
        };
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["HTML"], "<figure></figure>");
        assert_eq!(json["numResults"], 1);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(SearchMode::parse(""), Some(SearchMode::Stemmed));
        assert_eq!(SearchMode::parse("Exact"), Some(SearchMode::Exact));
        assert_eq!(SearchMode::parse("fuzzy"), None);
    }
}
