//! Search engine - linear scan over the in-memory corpus
//!
//! Every query tokenizes and stems the query, scores every line by token
//! overlap, keeps lines with a positive score and ranks them by descending
//! score. Lines with equal scores stay in corpus order.

use std::sync::Arc;

use super::render::{make_bold, make_bold_exact, render};
use super::schema::{MatchResult, SearchMode, SearchResults};
use super::tokenizer::tokenize_query;
use crate::corpus::Corpus;

/// Number of `(d, q)` pairs with `d == q`. Duplicates on either side multiply.
pub fn match_score(line_tokens: &[String], query_tokens: &[String]) -> usize {
    line_tokens
        .iter()
        .map(|d| query_tokens.iter().filter(|q| *q == d).count())
        .sum()
}

/// Sort hits by descending score, keeping encounter order for ties
pub fn rank(hits: &mut [MatchResult]) {
    hits.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Search engine over a shared, read-only corpus
#[derive(Debug, Clone)]
pub struct SearchEngine {
    corpus: Arc<Corpus>,
}

impl SearchEngine {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Build the result for the line at `index`
    fn hit_at(&self, index: usize, highlighted_text: String, score: usize) -> Option<MatchResult> {
        let line = self.corpus.get(index)?;
        Some(MatchResult {
            context_before: self.corpus.line_before(index).to_string(),
            highlighted_text,
            context_after: self.corpus.line_after(index).to_string(),
            play_name: line.play_name.clone(),
            line_number: line.line_number.clone(),
            speaker: line.speaker.clone(),
            line_type: line.line_type.clone(),
            score,
        })
    }

    /// Scored hits for `query`, ranked
    pub fn find_hits(&self, query: &str) -> Vec<MatchResult> {
        let query_tokens = tokenize_query(query);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<MatchResult> = self
            .corpus
            .lines()
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let score = match_score(&line.tokens, &query_tokens);
                if score == 0 {
                    return None;
                }
                self.hit_at(index, make_bold(&line.text_entry, query), score)
            })
            .collect();

        rank(&mut hits);
        hits
    }

    /// Case-insensitive substring hits for `query`, in corpus order, score 0
    pub fn find_exact(&self, query: &str) -> Vec<MatchResult> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        self.corpus
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| line.text_entry.to_lowercase().contains(&needle))
            .filter_map(|(index, line)| {
                self.hit_at(index, make_bold_exact(&line.text_entry, query), 0)
            })
            .collect()
    }

    /// Run a search and render the response body
    pub fn search(&self, query: &str, mode: SearchMode) -> SearchResults {
        let hits = match mode {
            SearchMode::Stemmed => self.find_hits(query),
            SearchMode::Exact => self.find_exact(query),
        };

        tracing::debug!("Query {:?} ({:?}) matched {} lines", query, mode, hits.len());

        SearchResults {
            html: render(&hits),
            num_results: hits.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineRecord;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn line(text: &str, stems: &[&str]) -> LineRecord {
        LineRecord {
            line_type: "line".to_string(),
            play_name: "Hamlet".to_string(),
            speaker: "HAMLET".to_string(),
            text_entry: text.to_string(),
            tokens: tokens(stems),
            ..Default::default()
        }
    }

    fn engine_for(lines: Vec<LineRecord>) -> SearchEngine {
        SearchEngine::new(Arc::new(Corpus::from_lines(lines)))
    }

    #[test]
    fn test_match_score_is_multiplicative() {
        let line_tokens = tokens(&["to", "be", "or", "not", "to", "be"]);
        assert_eq!(match_score(&line_tokens, &tokens(&["to", "be"])), 4);
        assert_eq!(match_score(&line_tokens, &tokens(&["to", "to"])), 4);
        assert_eq!(match_score(&line_tokens, &tokens(&["not"])), 1);
        assert_eq!(match_score(&line_tokens, &tokens(&["king"])), 0);
        assert_eq!(match_score(&line_tokens, &[]), 0);
        assert_eq!(match_score(&[], &tokens(&["to"])), 0);
    }

    #[test]
    fn test_rank_is_stable() {
        let mut hits: Vec<MatchResult> = [(1, "a"), (3, "b"), (1, "c"), (3, "d")]
            .iter()
            .map(|(score, text)| MatchResult {
                highlighted_text: text.to_string(),
                score: *score,
                ..Default::default()
            })
            .collect();
        rank(&mut hits);
        let order: Vec<&str> = hits.iter().map(|h| h.highlighted_text.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_single_line_scores_four() {
        let engine = engine_for(vec![line(
            "to be or not to be",
            &["to", "be", "or", "not", "to", "be"],
        )]);
        let hits = engine.find_hits("to be");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 4);
        assert_eq!(hits[0].context_before, "");
        assert_eq!(hits[0].context_after, "");

        let results = engine.search("to be", SearchMode::Stemmed);
        assert_eq!(results.num_results, 1);
        assert!(results.html.contains("RANK 4"));
    }

    #[test]
    fn test_empty_query_has_no_results() {
        let engine = engine_for(vec![line("to be", &["to", "be"])]);
        for query in ["", "   ", "?!"] {
            let results = engine.search(query, SearchMode::Stemmed);
            assert_eq!(results.num_results, 0, "query {:?}", query);
            assert!(results.html.is_empty());
        }
    }

    #[test]
    fn test_higher_score_first() {
        let engine = engine_for(vec![
            line("three kings", &["king", "king", "king"]),
            line("unrelated", &["unrel"]),
            line("five kings", &["king", "king", "king", "king", "king"]),
        ]);
        let results = engine.search("king", SearchMode::Stemmed);
        assert_eq!(results.num_results, 2);
        let five = results.html.find("RANK 5").unwrap();
        let three = results.html.find("RANK 3").unwrap();
        assert!(five < three);
    }

    #[test]
    fn test_query_is_stemmed() {
        let engine = engine_for(vec![line("The king is running", &["the", "king", "is", "run"])]);
        let hits = engine.find_hits("kings running");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 2);
    }

    #[test]
    fn test_context_window_at_edges() {
        let engine = engine_for(vec![
            line("first king", &["first", "king"]),
            line("middle king", &["middl", "king"]),
            line("last king", &["last", "king"]),
        ]);
        let hits = engine.find_hits("king");
        assert_eq!(hits.len(), 3);

        assert_eq!(hits[0].context_before, "");
        assert_eq!(hits[0].context_after, "middle king");
        assert_eq!(hits[1].context_before, "first king");
        assert_eq!(hits[1].context_after, "last king");
        assert_eq!(hits[2].context_before, "middle king");
        assert_eq!(hits[2].context_after, "");
    }

    #[test]
    fn test_highlight_uses_raw_query() {
        let engine = engine_for(vec![line("Kings are running", &["king", "ar", "run"])]);
        let hits = engine.find_hits("king");
        assert_eq!(hits[0].highlighted_text, "<b>Kings</b> are running");

        // Scored on stems, but "run" never appears in the raw text
        let engine = engine_for(vec![line("He ran away", &["he", "run", "awai"])]);
        let hits = engine.find_hits("run");
        assert_eq!(hits[0].score, 1);
        assert_eq!(hits[0].highlighted_text, "He ran away");
    }

    #[test]
    fn test_search_is_idempotent() {
        let engine = engine_for(vec![
            line("to be", &["to", "be"]),
            line("not to be", &["not", "to", "be"]),
            line("be be", &["be", "be"]),
        ]);
        let first = engine.search("be", SearchMode::Stemmed);
        let second = engine.search("be", SearchMode::Stemmed);
        assert_eq!(first, second);
        assert_eq!(first.num_results, 3);
    }

    #[test]
    fn test_exact_mode() {
        let engine = engine_for(vec![
            line("To be, or not to be", &[]),
            line("Something is rotten", &[]),
            line("TO BE CONTINUED", &[]),
        ]);
        let hits = engine.find_exact("to be");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].highlighted_text, "To be, or not <b>to be</b>");
        assert_eq!(hits[0].score, 0);
        assert_eq!(hits[1].highlighted_text, "TO BE CONTINUED");
        assert_eq!(hits[1].context_before, "Something is rotten");

        assert!(engine.find_exact("").is_empty());
        assert_eq!(engine.search("rotten", SearchMode::Exact).num_results, 1);
    }
}
