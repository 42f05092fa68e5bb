//! Frame glyph sets and the named presets.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Glyphs used to draw a frame.
///
/// Every glyph is expected to occupy one terminal column; the layout math
/// assumes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoxStyle {
    pub top_left: Cow<'static, str>,
    pub top_right: Cow<'static, str>,
    pub bottom_left: Cow<'static, str>,
    pub bottom_right: Cow<'static, str>,
    pub horizontal: Cow<'static, str>,
    pub vertical: Cow<'static, str>,
    /// Left end of the row separating the title from the content.
    pub junction_left: Cow<'static, str>,
    pub junction_right: Cow<'static, str>,
    pub junction_horizontal: Cow<'static, str>,
}

#[allow(clippy::too_many_arguments)]
const fn preset(
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
    junction_left: &'static str,
    junction_right: &'static str,
    junction_horizontal: &'static str,
) -> BoxStyle {
    BoxStyle {
        top_left: Cow::Borrowed(top_left),
        top_right: Cow::Borrowed(top_right),
        bottom_left: Cow::Borrowed(bottom_left),
        bottom_right: Cow::Borrowed(bottom_right),
        horizontal: Cow::Borrowed(horizontal),
        vertical: Cow::Borrowed(vertical),
        junction_left: Cow::Borrowed(junction_left),
        junction_right: Cow::Borrowed(junction_right),
        junction_horizontal: Cow::Borrowed(junction_horizontal),
    }
}

impl BoxStyle {
    /// Plain ASCII: `+`, `-` and `|`.
    pub const ASCII: BoxStyle = preset("+", "+", "+", "+", "-", "|", "+", "+", "-");
    /// Single-line box drawing.
    pub const UNICODE: BoxStyle = preset("┌", "┐", "└", "┘", "─", "│", "├", "┤", "─");
    pub const DOUBLE: BoxStyle = preset("╔", "╗", "╚", "╝", "═", "║", "╠", "╣", "═");
    pub const ROUNDED: BoxStyle = preset("╭", "╮", "╰", "╯", "─", "│", "├", "┤", "─");
    pub const HEAVY: BoxStyle = preset("┏", "┓", "┗", "┛", "━", "┃", "┣", "┫", "━");
    /// Solid full blocks on every edge.
    pub const BLOCK: BoxStyle = preset("█", "█", "█", "█", "█", "█", "█", "█", "█");
    /// Only vertical bars; corners and edges are blank.
    pub const MINIMAL: BoxStyle = preset(" ", " ", " ", " ", " ", "|", " ", " ", " ");

    /// Case-insensitive preset lookup, falling back to [`BoxStyle::ASCII`].
    pub fn from_name(name: Option<&str>) -> BoxStyle {
        BoxStyleName::from_name(name).style()
    }
}

/// Names of the predefined frame styles.
///
/// Serialized as the lowercase name; any unrecognized name deserializes to
/// `Ascii`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BoxStyleName {
    Ascii,
    #[default]
    Unicode,
    Double,
    Rounded,
    Heavy,
    Block,
    Minimal,
}

impl BoxStyleName {
    pub const ALL: [BoxStyleName; 7] = [
        BoxStyleName::Ascii,
        BoxStyleName::Unicode,
        BoxStyleName::Double,
        BoxStyleName::Rounded,
        BoxStyleName::Heavy,
        BoxStyleName::Block,
        BoxStyleName::Minimal,
    ];

    /// Case-insensitive lookup; `None` and unknown names map to `Ascii`.
    pub fn from_name(name: Option<&str>) -> BoxStyleName {
        let Some(name) = name else {
            return BoxStyleName::Ascii;
        };
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == wanted)
            .unwrap_or(BoxStyleName::Ascii)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoxStyleName::Ascii => "ascii",
            BoxStyleName::Unicode => "unicode",
            BoxStyleName::Double => "double",
            BoxStyleName::Rounded => "rounded",
            BoxStyleName::Heavy => "heavy",
            BoxStyleName::Block => "block",
            BoxStyleName::Minimal => "minimal",
        }
    }

    /// The glyph set for this preset.
    pub fn style(self) -> BoxStyle {
        match self {
            BoxStyleName::Ascii => BoxStyle::ASCII,
            BoxStyleName::Unicode => BoxStyle::UNICODE,
            BoxStyleName::Double => BoxStyle::DOUBLE,
            BoxStyleName::Rounded => BoxStyle::ROUNDED,
            BoxStyleName::Heavy => BoxStyle::HEAVY,
            BoxStyleName::Block => BoxStyle::BLOCK,
            BoxStyleName::Minimal => BoxStyle::MINIMAL,
        }
    }
}

impl From<String> for BoxStyleName {
    fn from(name: String) -> Self {
        BoxStyleName::from_name(Some(&name))
    }
}

impl FromStr for BoxStyleName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BoxStyleName::from_name(Some(s)))
    }
}

impl fmt::Display for BoxStyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<BoxStyleName> for BoxStyle {
    fn from(name: BoxStyleName) -> Self {
        name.style()
    }
}
