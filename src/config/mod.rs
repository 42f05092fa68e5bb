//! Configuration management
//!
//! Defaults are loaded once into an immutable [`Config`] and handed to each
//! [`ConsoleBuilder`](crate::ConsoleBuilder); nothing here is global.

mod io;
mod types;

pub use io::CONFIG_ENV;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path ($SIMPLETERM_CONFIG or ~/.config/simpleterm/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/simpleterm)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Missing keys keep their defaults; a malformed `rule_width` is an error.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        io::parse(contents)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// The frame style named by `box_style`
    pub fn frame_style(&self) -> crate::boxes::BoxStyle {
        self.box_style.style()
    }
}
