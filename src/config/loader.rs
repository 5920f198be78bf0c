// Configuration loader
// Loads settings from ~/.teachterm/config.toml, falling back to defaults

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::settings::Config;

/// ~/.teachterm
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// ~/.teachterm/config.toml
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default location
pub fn load_config() -> Result<Config> {
    load_config_from(&default_config_path()?)
}

/// Load configuration from `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = toml::from_str(&contents).with_context(|| {
        format!(
            "Failed to parse {}\n\nCheck the TOML syntax, or delete the file to use defaults",
            path.display()
        )
    })?;

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}
