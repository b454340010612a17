//! Line reader over a buffered input source.

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::map::{parse_selection, Selection};

/// Reads one selection per line.
///
/// The line buffer is reused between calls.
pub struct MenuReader<R> {
    input: R,
    line: String,
}

impl<R: BufRead> MenuReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::with_capacity(16),
        }
    }

    /// Read the next selection.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn next_selection(&mut self) -> Result<Option<Selection>> {
        self.line.clear();
        let read = self
            .input
            .read_line(&mut self.line)
            .context("failed to read menu choice")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(parse_selection(&self.line)))
    }
}
