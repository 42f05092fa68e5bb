//! Foreground/background color escape pairs.
//!
//! The sixteen named colors use the classic SGR codes (30-37, 90-97 and
//! their background counterparts). Palette and true-color values are built
//! on demand and validated before any escape text is produced.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{ConsoleError, Result};

/// Reset all colors and styles.
pub const RESET: &str = "\x1b[0m";

/// A color as a pair of escape sequences, one for the foreground and one
/// for the background. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    fg: Cow<'static, str>,
    bg: Cow<'static, str>,
}

const fn named(fg: &'static str, bg: &'static str) -> Color {
    Color {
        fg: Cow::Borrowed(fg),
        bg: Cow::Borrowed(bg),
    }
}

impl Color {
    pub const BLACK: Color = named("\x1b[30m", "\x1b[40m");
    pub const RED: Color = named("\x1b[31m", "\x1b[41m");
    pub const GREEN: Color = named("\x1b[32m", "\x1b[42m");
    pub const YELLOW: Color = named("\x1b[33m", "\x1b[43m");
    pub const BLUE: Color = named("\x1b[34m", "\x1b[44m");
    pub const MAGENTA: Color = named("\x1b[35m", "\x1b[45m");
    pub const CYAN: Color = named("\x1b[36m", "\x1b[46m");
    pub const WHITE: Color = named("\x1b[37m", "\x1b[47m");

    pub const BRIGHT_BLACK: Color = named("\x1b[90m", "\x1b[100m");
    pub const BRIGHT_RED: Color = named("\x1b[91m", "\x1b[101m");
    pub const BRIGHT_GREEN: Color = named("\x1b[92m", "\x1b[102m");
    pub const BRIGHT_YELLOW: Color = named("\x1b[93m", "\x1b[103m");
    pub const BRIGHT_BLUE: Color = named("\x1b[94m", "\x1b[104m");
    pub const BRIGHT_MAGENTA: Color = named("\x1b[95m", "\x1b[105m");
    pub const BRIGHT_CYAN: Color = named("\x1b[96m", "\x1b[106m");
    pub const BRIGHT_WHITE: Color = named("\x1b[97m", "\x1b[107m");

    /// All sixteen named colors, standard first, in SGR order.
    pub const NAMED: [(&'static str, Color); 16] = [
        ("black", Color::BLACK),
        ("red", Color::RED),
        ("green", Color::GREEN),
        ("yellow", Color::YELLOW),
        ("blue", Color::BLUE),
        ("magenta", Color::MAGENTA),
        ("cyan", Color::CYAN),
        ("white", Color::WHITE),
        ("bright_black", Color::BRIGHT_BLACK),
        ("bright_red", Color::BRIGHT_RED),
        ("bright_green", Color::BRIGHT_GREEN),
        ("bright_yellow", Color::BRIGHT_YELLOW),
        ("bright_blue", Color::BRIGHT_BLUE),
        ("bright_magenta", Color::BRIGHT_MAGENTA),
        ("bright_cyan", Color::BRIGHT_CYAN),
        ("bright_white", Color::BRIGHT_WHITE),
    ];

    /// Build a color from the 256-color palette.
    ///
    /// # Errors
    /// `InvalidArgument` when `code` is outside `0..=255`.
    pub fn from_palette_index(code: i64) -> Result<Self> {
        if !(0..=255).contains(&code) {
            return Err(ConsoleError::invalid(format!(
                "256-color code must be 0-255, got {}",
                code
            )));
        }
        Ok(Self {
            fg: Cow::Owned(format!("\x1b[38;5;{}m", code)),
            bg: Cow::Owned(format!("\x1b[48;5;{}m", code)),
        })
    }

    /// Build a 24-bit true color.
    ///
    /// # Errors
    /// `InvalidArgument` when any channel is outside `0..=255`.
    pub fn from_rgb(r: i64, g: i64, b: i64) -> Result<Self> {
        for (name, value) in [("red", r), ("green", g), ("blue", b)] {
            if !(0..=255).contains(&value) {
                return Err(ConsoleError::invalid(format!(
                    "RGB values must be 0-255, {} channel was {}",
                    name, value
                )));
            }
        }
        Ok(Self {
            fg: Cow::Owned(format!("\x1b[38;2;{};{};{}m", r, g, b)),
            bg: Cow::Owned(format!("\x1b[48;2;{};{};{}m", r, g, b)),
        })
    }

    /// Build a true color from channels that are in range by construction.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            fg: Cow::Owned(format!("\x1b[38;2;{};{};{}m", r, g, b)),
            bg: Cow::Owned(format!("\x1b[48;2;{};{};{}m", r, g, b)),
        }
    }

    /// Look up one of the sixteen named colors.
    ///
    /// Case-insensitive; `-` and `_` are interchangeable (`bright-red`).
    pub fn named(name: &str) -> Option<Self> {
        let wanted = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == wanted)
            .map(|(_, c)| c.clone())
    }

    /// Foreground escape sequence.
    pub fn fg(&self) -> &str {
        &self.fg
    }

    /// Background escape sequence.
    pub fn bg(&self) -> &str {
        &self.bg
    }
}

impl fmt::Display for Color {
    /// Writes the foreground sequence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fg)
    }
}

impl FromStr for Color {
    type Err = ConsoleError;

    /// Accepts a color name, a palette index (`"208"`) or a hex triple (`"#ff8800"`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let code = s
                .parse::<i64>()
                .map_err(|_| ConsoleError::invalid(format!("Palette index out of range: {}", s)))?;
            return Self::from_palette_index(code);
        }
        Self::named(s).ok_or_else(|| ConsoleError::invalid(format!("Unknown color: {}", s)))
    }
}

fn parse_hex(hex: &str) -> Result<Color> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConsoleError::invalid(format!(
            "Hex colors need six digits: #{}",
            hex
        )));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| ConsoleError::invalid(format!("Bad hex channel in #{}", hex)))
    };
    Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
}
