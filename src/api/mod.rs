pub mod search;
pub mod server;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::state::AppState;
use shakesearch_backend::config::AppConfig;

/// Build the HTTP application: API routes, static files for everything else
pub fn router(state: Arc<AppState>, config: &AppConfig) -> Router {
    Router::new()
        .route("/search", get(search::search))
        .route("/api/health", get(server::health_check))
        .fallback_service(ServeDir::new(config.get_static_dir()))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
