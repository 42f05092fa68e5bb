//! Labeled values offered by `ask_choice`.

use crate::error::{ConsoleError, Result};

/// A `(label, value)` pair. The label is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    label: String,
    value: T,
}

impl<T> Choice<T> {
    /// # Errors
    /// `Validation` when the label is empty or only whitespace.
    pub fn new(label: impl Into<String>, value: T) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ConsoleError::validation("Choice label cannot be empty"));
        }
        Ok(Self { label, value })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
