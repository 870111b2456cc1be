//! Store configuration
//!
//! Resolution order (later wins):
//! 1. Built-in defaults
//! 2. ~/.snippetbox/config.toml, if present
//! 3. Environment: DATABASE_URL, SNIPPETBOX_MAX_CONNECTIONS,
//!    SNIPPETBOX_ACQUIRE_TIMEOUT_SECS

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default maximum connections for the pool.
/// Kept low: every call holds one connection only while its query runs.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/snippetbox";

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_MAX_CONNECTIONS: &str = "SNIPPETBOX_MAX_CONNECTIONS";
pub const ENV_ACQUIRE_TIMEOUT_SECS: &str = "SNIPPETBOX_ACQUIRE_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?} (invalid TOML): {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value '{value}' for {key}: expected a positive integer")]
    InvalidValue { key: &'static str, value: String },
}

/// Connection settings for the snippet store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    /// Load from the config file (if any) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Path to the config file (~/.snippetbox/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".snippetbox").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded store config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the environment).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_DATABASE_URL).filter(|v| !v.is_empty()) {
            self.database_url = url;
        }
        if let Some(value) = lookup(ENV_MAX_CONNECTIONS) {
            self.max_connections = parse_positive(ENV_MAX_CONNECTIONS, &value)?;
        }
        if let Some(value) = lookup(ENV_ACQUIRE_TIMEOUT_SECS) {
            self.acquire_timeout_secs = parse_positive(ENV_ACQUIRE_TIMEOUT_SECS, &value)?;
        }
        Ok(self)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

fn parse_positive<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.trim().parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
