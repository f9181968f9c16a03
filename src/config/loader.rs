//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;
use crate::error::{KeyFocusError, Result};

/// Default config path with `~` expanded.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load and validate configuration from `path`.
///
/// A missing file is not an error and yields `Config::default()`. Shortcut
/// strings are parsed here so a bad binding is reported at load time.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| KeyFocusError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    let config: Config = serde_json::from_str(&content)?;
    config.shortcut_bindings()?;

    info!(path = %path.display(), "Successfully loaded config");
    Ok(config)
}

/// Load configuration from ~/.keyfocus/config.json
///
/// Returns Config::default() if any step fails.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    let config_path = default_config_path();
    match load_config_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(
                path = %config_path.display(),
                error = %e,
                "Failed to load config, using defaults"
            );
            Config::default()
        }
    }
}
