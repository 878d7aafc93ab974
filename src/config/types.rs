// Configuration types module
// Defines the configuration data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub serving: ServingConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Static file serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServingConfig {
    /// Directory below which all servable files reside
    pub root: String,
    /// Files tried, in order, when a directory path is requested
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
}

fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string(), "index.htm".to_string()]
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Emit an access log line per request in addition to the request line
    pub access_log: bool,
    /// Access log format (common, combined, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "common".to_string()
}
