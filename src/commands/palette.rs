//! Palette command handler

use anyhow::Result;
use std::io::Write;

use simpleterm::{Color, Config, ConsoleBuilder, Style};

/// Steps in the 24-bit gradient row
const GRADIENT_STEPS: u16 = 64;

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, truecolor: bool) -> Result<()> {
    let mut cb = ConsoleBuilder::with_config(config)?;
    render(&mut cb, truecolor)?;
    cb.print()?;
    Ok(())
}

pub fn render<W: Write>(cb: &mut ConsoleBuilder<W>, truecolor: bool) -> simpleterm::Result<()> {
    cb.style(Style::Bold).line("Named colors").reset();
    for (name, color) in Color::NAMED.iter() {
        cb.background(color)
            .text("    ")
            .reset()
            .space()
            .color(color)
            .text(name)
            .reset()
            .newline();
    }

    cb.newline().style(Style::Bold).line("256-color palette").reset();
    for code in 0..=255 {
        let color = Color::from_palette_index(code)?;
        cb.background(&color).text(&format!("{:>4}", code)).reset();
        if code % 16 == 15 {
            cb.newline();
        }
    }

    if truecolor {
        cb.newline().style(Style::Bold).line("24-bit gradient").reset();
        for step in 0..GRADIENT_STEPS {
            let level = (step * 255 / (GRADIENT_STEPS - 1)) as u8;
            cb.background(&Color::rgb(level, 0, 255 - level)).space();
        }
        cb.reset().newline();
    }
    Ok(())
}
