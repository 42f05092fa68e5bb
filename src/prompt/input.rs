//! Line-oriented input for prompts.

use std::io::{self, BufRead};

/// A blocking source of text lines.
pub trait LineSource {
    /// Read one line without its terminator; `None` at end of stream.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
