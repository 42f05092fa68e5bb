//! Framed boxes
//!
//! Named glyph sets ([`BoxStyle`], [`BoxStyleName`]) and the pure layout
//! function ([`BoxLayout`]) the console builder renders through.

mod layout;
mod style;

pub use layout::{pad, split_lines, BoxLayout};
pub use style::{BoxStyle, BoxStyleName};
