//! simpleterm library
//!
//! Terminal output toolkit: ANSI colors and styles, framed boxes, an
//! accumulating [`ConsoleBuilder`] and validated line-based [`Prompt`]s.

pub mod ansi;
pub mod boxes;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod i18n;
pub mod prompt;

pub use ansi::{Color, Style};
pub use boxes::{BoxLayout, BoxStyle, BoxStyleName};
pub use config::Config;
pub use console::{ConsoleBuilder, LINE_SEPARATOR};
pub use error::{ConsoleError, Result};
pub use i18n::{BundledMessages, Locale, MessageSource};
pub use prompt::{Choice, LineSource, Prompt};
