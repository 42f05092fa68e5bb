//! ANSI escape-code tables
//!
//! Static color and style escapes plus constructors for palette and
//! true-color values. Everything here is a pure value; nothing writes to a
//! terminal.

mod color;
mod style;

pub use color::{Color, RESET};
pub use style::Style;
