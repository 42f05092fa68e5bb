//! Command handlers for the simpleterm CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod boxes;
pub mod completions;
pub mod config;
pub mod palette;
pub mod rule;
pub mod styles;
pub mod survey;

use anyhow::Result;
use std::path::Path;

use simpleterm::{Config, Locale};

/// Load the config from `path` (or the default location) and apply the
/// `--locale` override.
pub fn load_config(path: Option<&Path>, locale: Option<&str>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(tag) = locale {
        config.locale = Locale::new(tag);
    }
    Ok(config)
}
