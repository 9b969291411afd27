//! Search module - scoring, ranking and rendering over the in-memory corpus
//!
//! - `tokenizer` / `stemmer`: query text to Porter stems
//! - `engine`: term-overlap scoring and stable ranking
//! - `render`: highlighting and HTML result cards
//! - `schema`: result and response types

pub mod engine;
pub mod render;
pub mod schema;
pub mod stemmer;
pub mod tokenizer;

pub use engine::{match_score, rank, SearchEngine};
pub use schema::{MatchResult, SearchMode, SearchResults};
pub use stemmer::stem;
pub use tokenizer::tokenize_query;
