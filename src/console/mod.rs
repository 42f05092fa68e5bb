//! The console builder: an append-only buffer with chained styling,
//! indentation-aware lines, rules and boxes, flushed to a sink in one write.
//!
//! ```
//! use simpleterm::{Color, Config, ConsoleBuilder};
//!
//! let mut cb = ConsoleBuilder::with_sink(&Config::default(), Vec::new()).unwrap();
//! cb.color(&Color::GREEN).text("ok").reset();
//! cb.set_indent(1).line("details");
//! assert!(cb.build().contains("  details"));
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::ansi::{Color, Style, RESET};
use crate::boxes::{BoxLayout, BoxStyle};
use crate::config::Config;
use crate::error::{ConsoleError, Result};
use crate::i18n::{BundledMessages, Locale, MessageSource};

/// Line terminator appended by `newline()`, `line()`, rules and boxes.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Line terminator appended by `newline()`, `line()`, rules and boxes.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Append `format_args!` output as an indented line.
///
/// Expands to [`ConsoleBuilder::formatted_line`] and therefore yields a
/// `Result`.
#[macro_export]
macro_rules! linef {
    ($cb:expr, $($arg:tt)*) => {
        $cb.formatted_line(::std::format_args!($($arg)*))
    };
}

/// Accumulates styled text and writes it to `W` on [`print`](Self::print).
///
/// Mutating operations return `&mut Self` so calls chain. Settings start from
/// the [`Config`] passed at construction and can be overridden per instance.
#[derive(Debug)]
pub struct ConsoleBuilder<W: Write = io::Stdout> {
    buf: String,
    rule_width: usize,
    indent_unit: String,
    indent: usize,
    box_style: BoxStyle,
    locale: Locale,
    messages: Box<dyn MessageSource>,
    sink: W,
}

impl ConsoleBuilder<io::Stdout> {
    /// A builder with default settings writing to stdout.
    pub fn new() -> Self {
        Self::from_parts(&Config::default(), io::stdout())
    }

    /// A builder writing to stdout.
    ///
    /// # Errors
    /// `InvalidArgument` when `config` fails [`Config::validate`].
    pub fn with_config(config: &Config) -> Result<Self> {
        Self::with_sink(config, io::stdout())
    }
}

impl Default for ConsoleBuilder<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleBuilder<W> {
    /// A builder writing to an arbitrary sink.
    ///
    /// # Errors
    /// `InvalidArgument` for a zero rule width or an empty indent unit.
    pub fn with_sink(config: &Config, sink: W) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, sink))
    }

    fn from_parts(config: &Config, sink: W) -> Self {
        Self {
            buf: String::new(),
            rule_width: config.rule_width,
            indent_unit: config.indent_unit.clone(),
            indent: 0,
            box_style: config.frame_style(),
            locale: config.locale.clone(),
            messages: Box::new(BundledMessages),
            sink,
        }
    }

    /// Replace the message catalog used by [`msg`](Self::msg).
    pub fn with_messages(mut self, messages: impl MessageSource + 'static) -> Self {
        self.messages = Box::new(messages);
        self
    }

    // Settings

    pub fn rule_width(&self) -> usize {
        self.rule_width
    }

    /// # Errors
    /// `InvalidArgument` when `width` is 0.
    pub fn set_rule_width(&mut self, width: usize) -> Result<&mut Self> {
        if width == 0 {
            return Err(ConsoleError::invalid("Width must be > 0"));
        }
        self.rule_width = width;
        Ok(self)
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// # Errors
    /// `InvalidArgument` when `unit` is empty.
    pub fn set_indent_unit(&mut self, unit: &str) -> Result<&mut Self> {
        if unit.is_empty() {
            return Err(ConsoleError::invalid("Indent unit cannot be empty"));
        }
        self.indent_unit = unit.to_string();
        Ok(self)
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Set the indentation level. Negative levels clamp to 0.
    pub fn set_indent(&mut self, levels: i32) -> &mut Self {
        self.indent = usize::try_from(levels).unwrap_or(0);
        self
    }

    pub fn box_style(&self) -> &BoxStyle {
        &self.box_style
    }

    pub fn set_box_style(&mut self, style: BoxStyle) -> &mut Self {
        self.box_style = style;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Switch the locale used for message lookup.
    pub fn set_locale(&mut self, locale: impl Into<Locale>) -> &mut Self {
        self.locale = locale.into();
        tracing::debug!(locale = %self.locale, "console locale changed");
        self
    }

    /// Look up a localized message for the current locale.
    ///
    /// # Errors
    /// `MissingMessage` when the key is not in the catalog.
    pub fn msg(&self, key: &str) -> Result<String> {
        self.messages.message(key, &self.locale)
    }

    fn current_indent(&self) -> String {
        self.indent_unit.repeat(self.indent)
    }

    // Appending

    pub fn color(&mut self, color: &Color) -> &mut Self {
        self.buf.push_str(color.fg());
        self
    }

    pub fn background(&mut self, color: &Color) -> &mut Self {
        self.buf.push_str(color.bg());
        self
    }

    pub fn style(&mut self, style: Style) -> &mut Self {
        self.buf.push_str(style.code());
        self
    }

    /// Append the master reset sequence.
    pub fn reset(&mut self) -> &mut Self {
        self.buf.push_str(RESET);
        self
    }

    /// Append text verbatim.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    pub fn space(&mut self) -> &mut Self {
        self.buf.push(' ');
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push_str(LINE_SEPARATOR);
        self
    }

    /// Append the current indentation, `text`, and a line terminator.
    pub fn line(&mut self, text: &str) -> &mut Self {
        let indent = self.current_indent();
        self.buf.push_str(&indent);
        self.buf.push_str(text);
        self.buf.push_str(LINE_SEPARATOR);
        self
    }

    /// Format `args` and append the result as a [`line`](Self::line).
    ///
    /// Usually called through [`linef!`](crate::linef).
    ///
    /// # Errors
    /// `Format` when a `Display` implementation in `args` fails.
    pub fn formatted_line(&mut self, args: fmt::Arguments<'_>) -> Result<&mut Self> {
        let mut text = String::new();
        fmt::Write::write_fmt(&mut text, args)?;
        Ok(self.line(&text))
    }

    /// A rule of `ch` as wide as the configured rule width.
    pub fn rule(&mut self, ch: char) -> &mut Self {
        self.rule_with_width(ch, self.rule_width)
    }

    /// A rule of `ch` repeated `width` times; zero is drawn as one.
    pub fn rule_with_width(&mut self, ch: char, width: usize) -> &mut Self {
        let indent = self.current_indent();
        self.buf.push_str(&indent);
        self.buf.extend(std::iter::repeat(ch).take(width.max(1)));
        self.buf.push_str(LINE_SEPARATOR);
        self
    }

    /// Frame `content` with the configured box style.
    pub fn boxed(&mut self, title: Option<&str>, content: &str) -> &mut Self {
        let style = self.box_style.clone();
        self.boxed_with(title, content, &style)
    }

    /// Frame `content` with `style`. Every row carries the current indentation.
    pub fn boxed_with(&mut self, title: Option<&str>, content: &str, style: &BoxStyle) -> &mut Self {
        let indent = self.current_indent();
        for row in BoxLayout::compute(title, content, style).rows() {
            self.buf.push_str(&indent);
            self.buf.push_str(row);
            self.buf.push_str(LINE_SEPARATOR);
        }
        self
    }

    /// Run `then` against this builder when `condition` holds.
    pub fn when(&mut self, condition: bool, then: impl FnOnce(&mut Self)) -> &mut Self {
        if condition {
            then(self);
        }
        self
    }

    // Output

    /// The buffered text. The buffer is left untouched.
    pub fn build(&self) -> String {
        self.buf.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) -> &mut Self {
        self.buf.clear();
        self
    }

    /// Write the buffer to the sink, flush it, and clear the buffer.
    ///
    /// # Errors
    /// `Io` when the sink rejects the write; the buffer is kept in that case.
    pub fn print(&mut self) -> Result<()> {
        tracing::trace!(bytes = self.buf.len(), "writing console buffer");
        self.sink.write_all(self.buf.as_bytes())?;
        self.sink.flush()?;
        self.clear();
        Ok(())
    }

    /// Append a line terminator, then [`print`](Self::print).
    pub fn println(&mut self) -> Result<()> {
        self.newline();
        self.print()
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}
