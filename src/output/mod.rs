//! Local sinks: the console mirror and the rotated file, plus the path
//! layouts that decide where each day's file goes.

mod console;
mod file;
mod path;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use path::{Layout, PathStrategy};

use crate::clock::Timestamp;
use crate::Error;

/// Everything guarded by the logger's write lock.
///
/// Entry, rotation and the periodic flush all go through one
/// `Mutex<LocalSinks>`, so console lines and file lines share one order.
#[derive(Debug)]
pub struct LocalSinks {
    pub console: ConsoleSink,
    pub file: FileSink,
}

impl LocalSinks {
    #[must_use]
    pub const fn new(console: ConsoleSink, file: FileSink) -> Self {
        Self { console, file }
    }

    /// Console first, then the file (rotating if the day moved on).
    ///
    /// A console failure does not stop the file write. A file error wins over a
    /// console error.
    ///
    /// # Errors
    /// Console I/O as [`Error::Io`], otherwise whatever rotation or the file write reports.
    pub fn write_line(&mut self, now: &Timestamp, line: &str) -> Result<(), Error> {
        let console = self.console.write(line).map_err(Error::Io);

        if self.file.needs_rotation(now) {
            self.file.rotate(now)?;
        }
        self.file.write(line)?;

        console
    }

    /// # Errors
    /// The file flush error; console flush failures are ignored.
    pub fn flush(&mut self) -> Result<(), Error> {
        let _ = self.console.flush();
        self.file.flush()
    }
}
