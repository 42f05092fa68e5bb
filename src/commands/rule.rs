//! Rule command handler

use anyhow::Result;
use std::io::Write;

use simpleterm::{Config, ConsoleBuilder};

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, ch: char, width: Option<usize>, indent: i32) -> Result<()> {
    let mut cb = ConsoleBuilder::with_config(config)?;
    render(&mut cb, ch, width, indent);
    cb.print()?;
    Ok(())
}

pub fn render<W: Write>(cb: &mut ConsoleBuilder<W>, ch: char, width: Option<usize>, indent: i32) {
    cb.set_indent(indent);
    match width {
        Some(width) => cb.rule_with_width(ch, width),
        None => cb.rule(ch),
    };
}
