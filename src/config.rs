//! Configuration loading.
//!
//! Reads the server base URL and the store paths from a JSON file. Loading
//! never fails: a missing, malformed, or partial file resolves to defaults
//! with a warning, matching the forgiving behavior expected of an admin
//! tool pointed at a default local server.

use std::{fs, path::Path};

use serde::Deserialize;

/// Well-known local address used when no configuration supplies one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default location of the server's SQLite store file.
pub const DEFAULT_DB_PATH: &str = "/opt/retro-aim-server/oscar.sqlite";
/// Default location of the sqlite3 shell.
pub const DEFAULT_SQLITE3_PATH: &str = "/usr/bin/sqlite3";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the server's REST API, treated as an opaque string.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the server's SQLite store file.
    pub db_path: String,
    /// Path to the sqlite3 executable.
    pub sqlite3_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            sqlite3_path: DEFAULT_SQLITE3_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the given file, resolving to defaults when
    /// the file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(
                    config_file = %path.display(),
                    error = %err,
                    "config file not readable, using default URL {DEFAULT_BASE_URL}"
                );
                return Self::default();
            }
        };

        match serde_json::from_str::<AppConfig>(&contents) {
            Ok(config) => {
                tracing::info!(
                    config_file = %path.display(),
                    base_url = %config.server.base_url,
                    "loaded server URL from config"
                );
                config
            }
            Err(err) => {
                tracing::warn!(
                    config_file = %path.display(),
                    error = %err,
                    "invalid config format, using default URL {DEFAULT_BASE_URL}"
                );
                Self::default()
            }
        }
    }
}
