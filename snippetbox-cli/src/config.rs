//! Configuration loading for the CLI
//!
//! Priority order (highest to lowest):
//! 1. --database-url flag
//! 2. Process environment, then ./.env and ~/.snippetbox/.env
//!    (.env files never overwrite variables that are already set)
//! 3. ~/.snippetbox/config.toml
//! 4. Built-in defaults

use std::path::PathBuf;

use anyhow::{Context, Result};
use snippetbox_store::StoreConfig;

/// Load .env files into the environment without overwriting set variables.
///
/// Runs before tracing is initialised, so it returns the files it read
/// instead of logging them.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = home_env_file() {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

fn home_env_file() -> Option<PathBuf> {
    StoreConfig::config_path().and_then(|p| p.parent().map(|dir| dir.join(".env")))
}

/// Resolve store configuration, letting an explicit flag win.
pub fn resolve(database_url: Option<&str>) -> Result<StoreConfig> {
    let mut config = StoreConfig::load().context("Failed to load store configuration")?;
    if let Some(url) = database_url {
        config.database_url = url.to_owned();
    }
    Ok(config)
}
