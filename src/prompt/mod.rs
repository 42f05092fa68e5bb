//! Interactive prompts
//!
//! Every prompt follows the same read, validate, retry cycle: the question
//! is written through the [`ConsoleBuilder`], one line is read from the
//! [`LineSource`], and invalid answers trigger an error message and another
//! read. Retries are unbounded; end of input inside a retry loop ends the
//! prompt with [`ConsoleError::EndOfInput`].
//!
//! Reads are not synchronized. One `Prompt` should own the conversation
//! with a given input stream at a time.

mod choice;
mod input;

pub use choice::Choice;
pub use input::LineSource;

use std::io::{self, Write};

use regex::Regex;

use crate::ansi::Color;
use crate::config::Config;
use crate::console::ConsoleBuilder;
use crate::error::{ConsoleError, Result};
use crate::i18n;

/// Question suffix for yes/no prompts.
const YES_NO_HINT: &str = " [y/n]";

/// A console paired with an input source.
#[derive(Debug)]
pub struct Prompt<R, W: Write = io::Stdout> {
    console: ConsoleBuilder<W>,
    input: R,
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, reading from stdin.
    ///
    /// # Errors
    /// `InvalidArgument` when `config` fails [`Config::validate`].
    pub fn stdio(config: &Config) -> Result<Self> {
        Ok(Self::new(
            ConsoleBuilder::with_config(config)?,
            io::stdin().lock(),
        ))
    }
}

impl<R: LineSource, W: Write> Prompt<R, W> {
    pub fn new(console: ConsoleBuilder<W>, input: R) -> Self {
        Self { console, input }
    }

    pub fn console(&self) -> &ConsoleBuilder<W> {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut ConsoleBuilder<W> {
        &mut self.console
    }

    pub fn into_parts(self) -> (ConsoleBuilder<W>, R) {
        (self.console, self.input)
    }

    fn print_error(&mut self, message: &str) -> Result<()> {
        self.console
            .color(&Color::RED)
            .text(message)
            .reset()
            .println()
    }

    fn print_localized_error(&mut self, key: &str) -> Result<()> {
        let message = self.console.msg(key)?;
        self.print_error(&message)
    }

    /// Show `question` and read one raw line; `None` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.console
            .color(&Color::CYAN)
            .text(question)
            .space()
            .reset()
            .print()?;
        Ok(self.input.next_line()?)
    }

    fn ask_line(&mut self, question: &str) -> Result<String> {
        self.ask(question)?.ok_or(ConsoleError::EndOfInput)
    }

    /// Ask until `validator` accepts the answer, showing `error_message`
    /// after each rejection.
    pub fn ask_validated(
        &mut self,
        question: &str,
        mut validator: impl FnMut(&str) -> bool,
        error_message: &str,
    ) -> Result<String> {
        loop {
            let answer = self.ask_line(question)?;
            if validator(&answer) {
                return Ok(answer);
            }
            tracing::trace!(question, "answer rejected by validator");
            self.print_error(error_message)?;
        }
    }

    /// Ask until the trimmed answer parses as an `i32`.
    pub fn ask_int(&mut self, question: &str) -> Result<i32> {
        loop {
            let answer = self.ask_line(question)?;
            match answer.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::trace!(question, error = %e, "answer is not an integer");
                    self.print_localized_error(i18n::INVALID_INT)?;
                }
            }
        }
    }

    /// Ask until the answer is an integer accepted by `validator`.
    pub fn ask_int_validated(
        &mut self,
        question: &str,
        mut validator: impl FnMut(i32) -> bool,
        error_message: &str,
    ) -> Result<i32> {
        loop {
            let value = self.ask_int(question)?;
            if validator(value) {
                return Ok(value);
            }
            self.print_error(error_message)?;
        }
    }

    /// Ask until the answer is `y`/`yes` or `n`/`no`, ignoring case and
    /// surrounding whitespace.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        let question = format!("{}{}", question, YES_NO_HINT);
        loop {
            let answer = self.ask_line(&question)?.trim().to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {}
            }
            let hint = self.console.msg(i18n::YES_NO)?;
            self.console
                .color(&Color::YELLOW)
                .text(&hint)
                .reset()
                .println()?;
        }
    }

    /// List `choices` with 1-based numbers and ask until a listed number is
    /// entered.
    ///
    /// # Errors
    /// `Validation` immediately when `choices` is empty.
    pub fn ask_choice<'c, T>(&mut self, question: &str, choices: &'c [Choice<T>]) -> Result<&'c T> {
        if choices.is_empty() {
            return Err(ConsoleError::validation("No choices provided"));
        }

        self.console.text(question).println()?;
        for (i, choice) in choices.iter().enumerate() {
            self.console
                .text(&format!("  {}) {}", i + 1, choice.label()))
                .println()?;
        }

        let choice_prompt = self.console.msg(i18n::CHOICE_PROMPT)?;
        loop {
            let answer = self.ask_line(&choice_prompt)?;
            let picked = answer
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| choices.get(idx));
            if let Some(choice) = picked {
                return Ok(choice.value());
            }
            self.print_localized_error(i18n::INVALID_CHOICE)?;
        }
    }

    /// Ask until the whole answer matches `pattern`.
    ///
    /// # Errors
    /// `InvalidArgument` before prompting when `pattern` is not a valid regex.
    pub fn ask_pattern(
        &mut self,
        question: &str,
        pattern: &str,
        error_message: &str,
    ) -> Result<String> {
        let anchored = Regex::new(&format!("^(?:{})$", pattern))
            .map_err(|e| ConsoleError::invalid(format!("Bad pattern {:?}: {}", pattern, e)))?;
        self.ask_validated(question, |answer| anchored.is_match(answer), error_message)
    }

    /// Ask until `mapper` converts the answer, showing `error_message` each
    /// time it fails.
    pub fn ask_mapped<T, E>(
        &mut self,
        question: &str,
        mut mapper: impl FnMut(&str) -> std::result::Result<T, E>,
        error_message: &str,
    ) -> Result<T> {
        loop {
            let answer = self.ask_line(question)?;
            match mapper(&answer) {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::trace!(question, "answer rejected by mapper");
                    self.print_error(error_message)?;
                }
            }
        }
    }
}
