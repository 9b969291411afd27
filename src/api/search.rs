use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::state::AppState;
use shakesearch_backend::search::SearchMode;
use shakesearch_backend::ApiError;

/// Query parameters of a search request. Repeated keys keep their first value.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    /// "stemmed" (default) or "exact"
    pub mode: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" if params.q.is_none() => params.q = Some(value),
                "mode" if params.mode.is_none() => params.mode = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// GET /search?q=<term>[&mode=exact]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = SearchParams::from_pairs(pairs);
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingQuery)?;

    let mode = match params.mode.as_deref() {
        None => SearchMode::default(),
        Some(mode) => {
            SearchMode::parse(mode).ok_or_else(|| ApiError::InvalidMode(mode.to_string()))?
        }
    };

    // Full corpus scan, keep it off the async workers
    let engine = state.engine.clone();
    let results = tokio::task::spawn_blocking(move || engine.search(&query, mode))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let body = serde_json::to_vec(&results)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
