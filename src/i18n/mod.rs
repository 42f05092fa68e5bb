//! Localized user-facing messages
//!
//! The prompt loop looks up its retry messages through a [`MessageSource`].
//! [`BundledMessages`] serves the catalogs compiled into the crate from
//! `assets/messages/*.toml`; any other source can be plugged into a
//! [`ConsoleBuilder`](crate::ConsoleBuilder) instead.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

/// Shown when a line does not parse as an integer.
pub const INVALID_INT: &str = "error.invalidInt";
/// Shown when a yes/no answer is not recognized.
pub const YES_NO: &str = "error.yesno";
/// Shown when a choice index is not a listed number.
pub const INVALID_CHOICE: &str = "error.invalidChoice";
/// Prompt text asking for a choice number.
pub const CHOICE_PROMPT: &str = "prompt.choice";

/// Catalog used when neither the full tag nor the language has one.
const FALLBACK_LANGUAGE: &str = "en";

const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../../assets/messages/en.toml")),
    ("de", include_str!("../../assets/messages/de.toml")),
];

/// A language tag such as `en` or `de-AT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Normalizes `_` separators to `-` (`de_AT` becomes `de-AT`).
    pub fn new(tag: &str) -> Self {
        let tag = tag.trim().replace('_', "-");
        if tag.is_empty() {
            Self::default()
        } else {
            Self(tag)
        }
    }

    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, lowercased.
    pub fn language(&self) -> String {
        self.0
            .split('-')
            .next()
            .unwrap_or(FALLBACK_LANGUAGE)
            .to_ascii_lowercase()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(FALLBACK_LANGUAGE.to_string())
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::new(&tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a message key for a locale.
pub trait MessageSource: fmt::Debug + Send + Sync {
    /// # Errors
    /// `MissingMessage` when no catalog in the locale's fallback chain has `key`.
    fn message(&self, key: &str, locale: &Locale) -> Result<String>;
}

/// Catalogs compiled into the crate (English and German).
///
/// Resolution order: the exact tag, then its language, then English.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledMessages;

type Catalogs = HashMap<&'static str, HashMap<String, String>>;

fn bundled_catalogs() -> Result<&'static Catalogs> {
    static PARSED: OnceLock<std::result::Result<Catalogs, String>> = OnceLock::new();
    PARSED
        .get_or_init(|| {
            BUNDLED
                .iter()
                .map(|(tag, source)| {
                    toml::from_str::<HashMap<String, String>>(source)
                        .map(|table| (*tag, table))
                        .map_err(|e| format!("{}: {}", tag, e))
                })
                .collect()
        })
        .as_ref()
        .map_err(|e| ConsoleError::Catalog(e.clone()))
}

impl BundledMessages {
    /// Locale tags with a bundled catalog.
    pub fn available() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(tag, _)| *tag)
    }
}

impl MessageSource for BundledMessages {
    fn message(&self, key: &str, locale: &Locale) -> Result<String> {
        let catalogs = bundled_catalogs()?;
        let tag = locale.tag().to_ascii_lowercase();
        let language = locale.language();

        let chain = [tag.as_str(), language.as_str(), FALLBACK_LANGUAGE];
        for candidate in chain {
            if let Some(text) = catalogs.get(candidate).and_then(|c| c.get(key)) {
                if candidate != tag {
                    tracing::trace!(key, locale = %locale, resolved = candidate, "message fallback");
                }
                return Ok(text.clone());
            }
        }

        Err(ConsoleError::MissingMessage {
            key: key.to_string(),
            locale: locale.to_string(),
        })
    }
}

/// A flat key/message table that ignores the locale.
impl MessageSource for HashMap<String, String> {
    fn message(&self, key: &str, locale: &Locale) -> Result<String> {
        self.get(key)
            .cloned()
            .ok_or_else(|| ConsoleError::MissingMessage {
                key: key.to_string(),
                locale: locale.to_string(),
            })
    }
}
