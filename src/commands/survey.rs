//! Survey command handler
//!
//! Walks through every prompt kind and shows the answers in a box.

use anyhow::Result;
use std::io::Write;

use simpleterm::{BoxStyleName, Choice, Color, Config, LineSource, Prompt};

/// Letters (any script), spaces, dots, apostrophes and hyphens.
const NAME_PATTERN: &str = r"[\p{L} .'-]+";

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    let mut prompt = Prompt::stdio(config)?;
    run(&mut prompt)
}

pub fn run<R: LineSource, W: Write>(prompt: &mut Prompt<R, W>) -> Result<()> {
    let name = prompt.ask_pattern(
        "Your name?",
        NAME_PATTERN,
        "Use letters, spaces, dots, apostrophes or hyphens.",
    )?;
    let age = prompt.ask_int_validated(
        "Your age?",
        |n| (0..=150).contains(&n),
        "Age must be between 0 and 150.",
    )?;

    let styles = BoxStyleName::ALL
        .iter()
        .map(|name| Choice::new(name.as_str(), *name))
        .collect::<simpleterm::Result<Vec<_>>>()?;
    let style = *prompt.ask_choice("Favorite frame style?", &styles)?;

    let accent = prompt.ask_mapped(
        "Accent color (name, 0-255 or #rrggbb)?",
        |answer| answer.parse::<Color>(),
        "Unknown color.",
    )?;

    let show = prompt.ask_yes_no("Show the summary?")?;

    let cb = prompt.console_mut();
    if show {
        let summary = format!("Name:  {}\nAge:   {}\nStyle: {}", name.trim(), age, style);
        cb.color(&accent)
            .boxed_with(Some("Survey"), &summary, &style.style())
            .reset();
    } else {
        cb.line("Nothing to show.");
    }
    cb.print()?;
    Ok(())
}
