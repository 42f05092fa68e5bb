//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::boxes::BoxStyleName;
use crate::error::{ConsoleError, Result};
use crate::i18n::Locale;

/// Defaults captured by every [`ConsoleBuilder`](crate::ConsoleBuilder) at
/// construction time.
///
/// ```toml
/// rule_width = 80
/// indent_unit = "  "
/// locale = "en"
/// box_style = "unicode"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Width of `rule()` separators when no explicit width is given
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
    /// String repeated once per indentation level
    #[serde(default = "default_indent_unit")]
    pub indent_unit: String,
    /// Locale used for prompt messages
    #[serde(default)]
    pub locale: Locale,
    /// Frame style used by `boxed()` when none is passed
    #[serde(default)]
    pub box_style: BoxStyleName,
}

pub fn default_rule_width() -> usize {
    80
}

pub fn default_indent_unit() -> String {
    "  ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rule_width: default_rule_width(),
            indent_unit: default_indent_unit(),
            locale: Locale::default(),
            box_style: BoxStyleName::default(),
        }
    }
}

impl Config {
    /// Check the invariants serde cannot express.
    ///
    /// # Errors
    /// `InvalidArgument` for a zero rule width or an empty indent unit.
    pub fn validate(&self) -> Result<()> {
        if self.rule_width == 0 {
            return Err(ConsoleError::invalid("rule_width must be > 0"));
        }
        if self.indent_unit.is_empty() {
            return Err(ConsoleError::invalid("indent_unit cannot be empty"));
        }
        Ok(())
    }
}
