pub mod config;
pub mod corpus;
pub mod error;
pub mod models;
pub mod search;

pub use corpus::Corpus;
pub use error::{ApiError, CorpusError};
