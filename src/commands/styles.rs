//! Styles command handler

use anyhow::Result;
use std::io::Write;

use simpleterm::{Config, ConsoleBuilder, Style};

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    let mut cb = ConsoleBuilder::with_config(config)?;
    render(&mut cb);
    cb.print()?;
    Ok(())
}

/// One row per style: a sample for attributes, the raw escape for resets.
pub fn render<W: Write>(cb: &mut ConsoleBuilder<W>) {
    for style in Style::ALL {
        let escape = style.code().escape_debug().to_string();
        if style.is_reset() {
            cb.text(&format!("{:<20}{}", style.name(), escape)).newline();
        } else {
            cb.style(style)
                .text(&format!("{:<20}", style.name()))
                .reset()
                .text(&escape)
                .newline();
        }
    }
}
