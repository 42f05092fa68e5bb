//! Box command handler

use anyhow::{Context, Result};
use std::io::{self, Read, Write};

use simpleterm::{BoxStyle, Config, ConsoleBuilder};

/// Handle the box command, reading stdin when no lines are given.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    title: Option<&str>,
    style: Option<&str>,
    indent: i32,
    lines: &[String],
) -> Result<()> {
    let content = if lines.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read box content from stdin")?;
        strip_final_newline(input)
    } else {
        lines.join("\n")
    };

    let mut cb = ConsoleBuilder::with_config(config)?;
    render(&mut cb, title, style, indent, &content);
    cb.print()?;
    Ok(())
}

/// Append the box to `cb`. An explicit style name wins over the config.
pub fn render<W: Write>(
    cb: &mut ConsoleBuilder<W>,
    title: Option<&str>,
    style: Option<&str>,
    indent: i32,
    content: &str,
) {
    cb.set_indent(indent);
    match style {
        Some(name) => cb.boxed_with(title, content, &BoxStyle::from_name(Some(name))),
        None => cb.boxed(title, content),
    };
}

/// Piped input usually ends with a newline that should not become an empty row.
fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
