//! Error taxonomy shared by the accumulator, the box renderer and the prompts.

use std::fmt;
use std::io;

/// Errors raised by simpleterm operations.
///
/// Prompt-loop validation rejections never show up here; they are turned
/// into a retry with a localized message instead.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Failed to format line")]
    Format(#[from] fmt::Error),

    #[error("No message '{key}' for locale '{locale}'")]
    MissingMessage { key: String, locale: String },

    #[error("Message catalog is malformed: {0}")]
    Catalog(String),

    #[error("Input ended before a valid answer was given")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result alias for fallible simpleterm operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;
