//! SGR text styles.

use std::fmt;

/// A text style escape from a fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    /// Dim or faint text.
    Dim,
    Italic,
    Underline,
    /// Swap foreground and background.
    Invert,
    Strikethrough,
    DoubleUnderline,
    /// Reset all styles and colors.
    ResetAll,
    /// Reset bold and dim (they share one reset code).
    ResetBoldDim,
    ResetItalic,
    ResetUnderline,
    ResetInvert,
    ResetStrikethrough,
}

impl Style {
    pub const ALL: [Style; 13] = [
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underline,
        Style::Invert,
        Style::Strikethrough,
        Style::DoubleUnderline,
        Style::ResetAll,
        Style::ResetBoldDim,
        Style::ResetItalic,
        Style::ResetUnderline,
        Style::ResetInvert,
        Style::ResetStrikethrough,
    ];

    /// The escape sequence for this style.
    pub fn code(self) -> &'static str {
        match self {
            Style::Bold => "\x1b[1m",
            Style::Dim => "\x1b[2m",
            Style::Italic => "\x1b[3m",
            Style::Underline => "\x1b[4m",
            Style::Invert => "\x1b[7m",
            Style::Strikethrough => "\x1b[9m",
            Style::DoubleUnderline => "\x1b[21m",
            Style::ResetAll => "\x1b[0m",
            Style::ResetBoldDim => "\x1b[22m",
            Style::ResetItalic => "\x1b[23m",
            Style::ResetUnderline => "\x1b[24m",
            Style::ResetInvert => "\x1b[27m",
            Style::ResetStrikethrough => "\x1b[29m",
        }
    }

    /// Human readable name, used by the `styles` command.
    pub fn name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Dim => "dim",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Invert => "invert",
            Style::Strikethrough => "strikethrough",
            Style::DoubleUnderline => "double-underline",
            Style::ResetAll => "reset-all",
            Style::ResetBoldDim => "reset-bold-dim",
            Style::ResetItalic => "reset-italic",
            Style::ResetUnderline => "reset-underline",
            Style::ResetInvert => "reset-invert",
            Style::ResetStrikethrough => "reset-strikethrough",
        }
    }

    /// True for the styles that switch an attribute off.
    pub fn is_reset(self) -> bool {
        matches!(
            self,
            Style::ResetAll
                | Style::ResetBoldDim
                | Style::ResetItalic
                | Style::ResetUnderline
                | Style::ResetInvert
                | Style::ResetStrikethrough
        )
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
