use chrono::{DateTime, Utc};
use shakesearch_backend::search::SearchEngine;

/// Shared application state. Read-only once the server is running.
pub struct AppState {
    pub engine: SearchEngine,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine,
            started_at: Utc::now(),
        }
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> i64 {
        Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}
