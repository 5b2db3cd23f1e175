//! Input queue construction
//!
//! Input text is read one line at a time, in file order:
//! - a line whose trimmed text is a base-10 integer yields that one value
//! - any other line yields the code point of each of its characters
//!
//! Empty lines yield nothing. The queue is sized to exactly the number of
//! values produced.

use crate::interpreter::errors::RunError;
use crate::parser::source::read_source;
use std::path::Path;

/// How strictly input lines are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Non-numeric lines are expanded character by character
    #[default]
    Lenient,
    /// Every non-empty line must be an integer
    NumericOnly,
}

/// Ordered input values with a read cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputQueue {
    values: Vec<i32>,
    cursor: usize,
}

impl InputQueue {
    pub fn new(values: Vec<i32>) -> Self {
        InputQueue { values, cursor: 0 }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse input text line by line according to `mode`.
    pub fn parse(text: &str, mode: InputMode) -> Result<Self, RunError> {
        let mut values = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }

            // A whitespace-only line is text, not an empty line
            match line.trim().parse::<i32>() {
                Ok(n) => values.push(n),
                Err(_) if mode == InputMode::NumericOnly => {
                    return Err(RunError::MalformedInputLine {
                        line: idx + 1,
                        text: line.to_string(),
                    });
                }
                Err(_) => values.extend(line.chars().map(|c| c as i32)),
            }
        }

        values.shrink_to_fit();
        tracing::debug!(values = values.len(), ?mode, "input queue built");
        Ok(InputQueue::new(values))
    }

    /// Parse optional input text; absent input is an empty queue
    pub fn from_optional(text: Option<&str>, mode: InputMode) -> Result<Self, RunError> {
        match text {
            Some(text) => Self::parse(text, mode),
            None => Ok(Self::empty()),
        }
    }

    /// Take the next value, advancing the cursor
    pub fn next_value(&mut self) -> Option<i32> {
        let value = self.values.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(value)
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Number of values consumed so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read and parse an input file.
pub fn load_input(path: &Path, mode: InputMode) -> Result<InputQueue, RunError> {
    let text = read_source(path)?;
    InputQueue::parse(&text, mode)
}
