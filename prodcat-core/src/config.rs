use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default bind address for the HTTP server.
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Default document store connection string.
const DEFAULT_STORE_URI: &str = "mongodb://localhost:27017";

/// Default database name.
const DEFAULT_DATABASE: &str = "prodcat";

/// Centralized configuration for the prodcat service.
///
/// Layered: built-in defaults, then `~/.prodcat/config.toml` if present,
/// then environment variables (`MONGODB_URI`, `PRODCAT_DB`, `PRODCAT_BIND`).
/// CLI flags are applied on top by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub store: StoreSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address the HTTP server binds to
    pub bind: SocketAddr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Document store connection string
    pub uri: String,
    /// Database holding the products collection
    pub database: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            store: StoreSection::default(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.parse().expect("invalid default bind address"),
        }
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            uri: DEFAULT_STORE_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load config from `~/.prodcat/config.toml` and the environment.
    ///
    /// A missing config file is not an error; defaults are used. Malformed
    /// TOML or a malformed env override is.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(Self::config_path())?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load config from an explicit path, without env overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| {
            CoreError::config(format!("invalid TOML in {}: {err}", path.display()))
        })
    }

    /// Get config file path: `~/.prodcat/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".prodcat/config.toml")
    }

    /// Save config to its default path, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|err| CoreError::config(format!("failed to serialize config: {err}")))?;

        fs::write(&config_path, toml_str)?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(uri) = env::var("MONGODB_URI") {
            if !uri.is_empty() {
                self.store.uri = uri;
            }
        }

        if let Ok(database) = env::var("PRODCAT_DB") {
            if !database.is_empty() {
                self.store.database = database;
            }
        }

        if let Ok(bind) = env::var("PRODCAT_BIND") {
            self.server.bind = bind
                .parse()
                .map_err(|_| CoreError::config(format!("invalid PRODCAT_BIND address '{bind}'")))?;
        }

        Ok(())
    }
}
