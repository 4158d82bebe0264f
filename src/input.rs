//! Player input

use std::io::BufRead;

use anyhow::{bail, Context};

/// Blocking source of player input lines
pub trait InputSource {
    /// Read the next line, trimmed and lowercased.
    ///
    /// Returns error if the input is closed or cannot be read.
    fn next_line(&mut self) -> anyhow::Result<String>;
}

/// Line-based input over any buffered reader, e.g. locked stdin
pub struct LineInput<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_line(&mut self) -> anyhow::Result<String> {
        self.buf.clear();
        let read = self
            .reader
            .read_line(&mut self.buf)
            .context("Failed to read player input")?;
        if read == 0 {
            bail!("Input closed before the game ended");
        }
        Ok(self.buf.trim().to_lowercase())
    }
}
