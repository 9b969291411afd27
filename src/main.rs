use std::fs::{File, OpenOptions};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod state;

use shakesearch_backend::config::{self, LogConfig};
use shakesearch_backend::search::SearchEngine;
use shakesearch_backend::Corpus;
use state::AppState;

/// Open the log file in append mode / 以追加模式打开日志文件
///
/// Empty path disables file logging.
fn open_log_file(path: &str) -> Option<std::io::Result<File>> {
    if path.is_empty() {
        return None;
    }
    Some(OpenOptions::new().create(true).append(true).open(path))
}

/// Console output plus an optional plain-text copy in the log file / 控制台输出及可选的日志文件
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let (file, file_error) = match open_log_file(&log.file) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let file_layer = file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!("Failed to open/create log file {}: {}", log.file, e);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Only the file config is needed to set up logging; env overrides come after
    let loaded = config::load_config().map_err(anyhow::Error::msg)?;
    init_tracing(&loaded.config.log);
    loaded.log_origin();

    let mut app_config = loaded.config;
    app_config.apply_env_overrides(|key| std::env::var(key).ok());

    let corpus_path = app_config.get_corpus_path();
    let corpus = match Corpus::load(&corpus_path) {
        Ok(corpus) => corpus,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Database loaded successfully: {} lines from {:?}", corpus.len(), corpus_path);

    let state = Arc::new(AppState::new(SearchEngine::new(Arc::new(corpus))));
    let app = api::router(state, &app_config);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Listening on http://{}", bind_addr);
    tracing::info!("Serving static files from {:?}", app_config.get_static_dir());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
