//! Application configuration.
//!
//! The only thing the storage core needs to know from the outside is where
//! its database file lives. The path is resolved in order of precedence:
//! the `OWAMBE_DATABASE_PATH` environment variable, the `[storage]` section
//! of a `config.toml` in the working directory, and finally a local default.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Fallback database location when neither the environment nor `config.toml`
/// provides one.
pub const DEFAULT_DATABASE_PATH: &str = "data/owambe_store.sqlite";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Filesystem path of the SQLite database backing the store.
    pub database_path: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    storage: Option<StorageSection>,
}

#[derive(Debug, Deserialize)]
struct StorageSection {
    database_path: Option<String>,
}

/// Loads the application configuration.
///
/// # Errors
///
/// Returns `Error::Io` if `config.toml` exists but cannot be read, or
/// `Error::Config` if it exists but cannot be parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    if let Ok(path) = std::env::var("OWAMBE_DATABASE_PATH") {
        info!("Using database path from OWAMBE_DATABASE_PATH: {}", path);
        return Ok(AppConfig {
            database_path: path,
        });
    }

    let config_path = Path::new("config.toml");
    if config_path.exists() {
        let raw = std::fs::read_to_string(config_path)?;
        let parsed: ConfigFile = toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("Failed to parse config.toml: {e}")))?;
        if let Some(path) = parsed.storage.and_then(|s| s.database_path) {
            info!("Using database path from config.toml: {}", path);
            return Ok(AppConfig {
                database_path: path,
            });
        }
        debug!("config.toml present but has no [storage] database_path entry");
    }

    debug!("Falling back to default database path");
    Ok(AppConfig {
        database_path: DEFAULT_DATABASE_PATH.to_string(),
    })
}
