//! Application configuration module / 应用配置模块
//!
//! Loads `config.json` from the working directory, creating it with defaults
//! on first run / 首次运行时创建默认配置文件.
//! `PORT` and `CORPUS_PATH` environment variables override the file values
//! once logging is up, so override warnings reach the log.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listen address / 监听地址
    pub server: ServerConfig,
    /// Corpus source / 语料来源
    pub corpus: CorpusConfig,
    /// Static files and request limits
    pub web: WebConfig,
    /// Log output / 日志输出
    pub log: LogConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Corpus configuration / 语料配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path of the JSON corpus file, relative to the working directory
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Directory served for every path not matched by an API route
    pub static_dir: String,
    /// Upper bound for a single request, in seconds
    pub request_timeout_secs: u64,
}

/// Log configuration / 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file, appended to. Empty disables file output
    pub file: String,
    /// Filter used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: "shakeworks.json".to_string(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            static_dir: "static".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: "shakespeare.log".to_string(),
            filter: "shakesearch_backend=info,tower_http=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn get_corpus_path(&self) -> PathBuf {
        PathBuf::from(&self.corpus.path)
    }

    pub fn get_static_dir(&self) -> PathBuf {
        PathBuf::from(&self.web.static_dir)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.web.request_timeout_secs.max(1))
    }

    /// Apply environment overrides. `lookup` is `std::env::var` in production.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
        if let Some(path) = lookup("CORPUS_PATH").filter(|p| !p.is_empty()) {
            self.corpus.path = path;
        }
    }
}

/// Get the config file path / 获取配置文件路径
fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Configuration read at startup, plus where it came from
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: PathBuf,
    /// The file did not exist and was written with defaults
    pub created: bool,
}

impl LoadedConfig {
    /// Report the load outcome. Call after the subscriber is installed.
    pub fn log_origin(&self) {
        if self.created {
            tracing::info!("Created default configuration at {:?}", self.path);
        } else {
            tracing::info!("Loaded configuration from {:?}", self.path);
        }
    }
}

/// Load configuration from `config.json`, creating a default one if missing.
/// Environment overrides are applied separately with
/// [`AppConfig::apply_env_overrides`].
pub fn load_config() -> Result<LoadedConfig, String> {
    load_config_from(&get_config_path())
}

/// Load configuration from a specific file, or create it with defaults
pub fn load_config_from(config_path: &Path) -> Result<LoadedConfig, String> {
    let path = config_path.to_path_buf();
    if config_path.exists() {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        Ok(LoadedConfig { config, path, created: false })
    } else {
        let config = AppConfig::default();
        save_config(&config, config_path)?;
        Ok(LoadedConfig { config, path, created: true })
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config(config: &AppConfig, config_path: &Path) -> Result<(), String> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}
