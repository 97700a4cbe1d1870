//! Console mirror. Every composed line goes here before it touches the file.

use std::io::{self, Write};

/// Wraps the console stream so tests and embedders can capture it.
pub struct ConsoleSink {
    target: Box<dyn Write + Send>,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

impl ConsoleSink {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    #[must_use]
    pub fn new(target: impl Write + Send + 'static) -> Self {
        Self {
            target: Box::new(target),
        }
    }

    /// Writes one already-terminated line.
    ///
    /// # Errors
    /// Whatever the underlying stream reports.
    pub fn write(&mut self, line: &str) -> io::Result<()> {
        self.target.write_all(line.as_bytes())
    }

    /// # Errors
    /// Whatever the underlying stream reports.
    pub fn flush(&mut self) -> io::Result<()> {
        self.target.flush()
    }
}
