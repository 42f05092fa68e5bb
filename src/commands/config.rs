//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use simpleterm::{Config, ConsoleBuilder};

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let mut cb = ConsoleBuilder::with_config(config)?;
    cb.text(&toml_str).print()?;
    Ok(())
}

/// Print where the config file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config: &Config, explicit: Option<&Path>) -> Result<()> {
    let path = resolve_path(explicit)?;
    let mut cb = ConsoleBuilder::with_config(config)?;
    cb.line(&path.display().to_string()).print()?;
    Ok(())
}

/// Write the default configuration and report where it went.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config: &Config, explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = init(explicit, force)?;
    let mut cb = ConsoleBuilder::with_config(config)?;
    cb.line(&format!("Wrote {}", path.display())).print()?;
    Ok(())
}

/// Save the defaults, refusing to overwrite an existing file unless forced.
fn init(explicit: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = resolve_path(explicit)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    Ok(path)
}

fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}
