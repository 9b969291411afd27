//! Error types
//!
//! `CorpusError` is fatal at startup. `ApiError` ends a single request and maps
//! to a plain-text HTTP response.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to open database file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to unmarshal database {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing search query in URL params")]
    MissingQuery,
    #[error("unknown search mode: {0}")]
    InvalidMode(String),
    #[error("encoding failure")]
    Encoding(#[from] serde_json::Error),
    #[error("internal error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery | ApiError::InvalidMode(_) => StatusCode::BAD_REQUEST,
            ApiError::Encoding(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Encoding(e) => tracing::error!("Failed to encode search results: {}", e),
            ApiError::Internal(e) => tracing::error!("Search request failed: {}", e),
            _ => {}
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
