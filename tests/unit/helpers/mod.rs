//! Test helper utilities

#![allow(dead_code)]

use std::io::Cursor;

use simpleterm::{Config, ConsoleBuilder, Prompt, LINE_SEPARATOR};

/// A console with default settings that writes into memory
pub fn console() -> ConsoleBuilder<Vec<u8>> {
    ConsoleBuilder::with_sink(&Config::default(), Vec::new()).unwrap()
}

/// A prompt reading `input` and writing into memory
pub fn scripted_prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
    Prompt::new(console(), Cursor::new(input.as_bytes().to_vec()))
}

/// Everything a scripted prompt wrote to its sink
pub fn written(prompt: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let (console, _) = prompt.into_parts();
    String::from_utf8(console.into_sink()).expect("console output is UTF-8")
}

/// Split builder output into rows, dropping the final empty segment
pub fn rows(output: &str) -> Vec<&str> {
    let mut rows: Vec<&str> = output.split(LINE_SEPARATOR).collect();
    if rows.last() == Some(&"") {
        rows.pop();
    }
    rows
}
