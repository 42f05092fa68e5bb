//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "SIMPLETERM_CONFIG";

/// Get the config file path ($SIMPLETERM_CONFIG or ~/.config/simpleterm/config.toml)
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.toml"))
}

/// Get the config directory path (~/.config/simpleterm)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("simpleterm"))
}

/// Load configuration from the default location, or return defaults if not found
pub fn load() -> Result<Config> {
    load_from(&config_path()?)
}

/// Load configuration from `path`, or return defaults if the file does not exist
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = parse(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Parse and validate a TOML document
pub fn parse(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    Ok(config)
}

/// Save configuration to `path`, creating parent directories
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}
