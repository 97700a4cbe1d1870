//! Day-rotated log file with retention cleanup.

use super::path::PathStrategy;
use crate::clock::{CalendarDate, Timestamp};
use crate::fmt::format_timestamp;
use crate::internal;
use crate::retention::compute_expiry_date;
use crate::Error;

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Owns the single open log file and the day it belongs to.
///
/// Not synchronized itself; the logger keeps it behind the same lock as the
/// console so file mutations never race the flush thread.
#[derive(Debug)]
pub struct FileSink {
    paths: PathStrategy,
    /// 0 keeps files forever.
    retention_days: u32,
    build_id: String,
    writer: Option<BufWriter<File>>,
    current_path: Option<PathBuf>,
    /// `YYYYMMDD` of the last successful open. Left untouched by failed
    /// rotations so the next entry retries.
    day: Option<i64>,
}

impl FileSink {
    #[must_use]
    pub fn new(paths: PathStrategy, retention_days: u32, build_id: impl Into<String>) -> Self {
        Self {
            paths,
            retention_days,
            build_id: build_id.into(),
            writer: None,
            current_path: None,
            day: None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    #[must_use]
    pub fn is_same_day(&self, now: &Timestamp) -> bool {
        self.day == Some(now.day_number())
    }

    /// True when the next write has to open a file first.
    #[must_use]
    pub fn needs_rotation(&self, now: &Timestamp) -> bool {
        !self.is_open() || !self.is_same_day(now)
    }

    /// Closes the current file and opens the one for `now`'s date.
    ///
    /// On directory or open failure nothing is left open and the tracked day
    /// is unchanged. Retention problems are recorded in the new file but never
    /// fail the rotation.
    ///
    /// # Errors
    /// [`Error::CreateDir`], [`Error::OpenFile`], or [`Error::Write`] if the
    /// banner could not be written.
    pub fn rotate(&mut self, now: &Timestamp) -> Result<(), Error> {
        self.close();

        let path = self.paths.path(now.date);
        internal::info("FILE", &format!("Logging to {}", path.display()));

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            match fs::create_dir_all(parent) {
                Ok(()) => {
                    internal::debug("FILE", &format!("Created directory: {}", parent.display()));
                }
                Err(e) => {
                    internal::error(
                        "FILE",
                        &format!(
                            "Could not create output directories {}: {e}",
                            parent.display()
                        ),
                    );
                    return Err(Error::CreateDir {
                        path: parent.to_path_buf(),
                        source: e,
                    });
                }
            }
        }

        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(e) => {
                internal::error(
                    "FILE",
                    &format!("Could not rotate logfile {}: {e}", path.display()),
                );
                return Err(Error::OpenFile { path, source: e });
            }
        };

        self.writer = Some(BufWriter::new(file));
        self.current_path = Some(path);
        self.day = Some(now.day_number());

        let stamp = format_timestamp(now);
        self.write(&format!(
            "{stamp} [INIT]: logfile initialized: commit {}\n",
            self.build_id
        ))?;

        if let Some(expiry) = compute_expiry_date(now.date, self.retention_days) {
            let note = self.expire(expiry);
            self.write(&format!("{stamp} [INIT]: {note}\n"))?;
        }

        Ok(())
    }

    /// Removes the file for `expiry` and describes what happened.
    fn expire(&self, expiry: CalendarDate) -> String {
        let target = self.paths.path(expiry);
        if self.current_path.as_deref() == Some(target.as_path()) || !target.exists() {
            internal::debug("FILE", &format!("No logfile for {expiry} to delete"));
            return "nothing to delete".to_string();
        }
        match fs::remove_file(&target) {
            Ok(()) => {
                internal::info("FILE", &format!("Deleted {}", target.display()));
                format!("deleted {}", target.display())
            }
            Err(e) => {
                internal::warn(
                    "FILE",
                    &format!("Could not delete {}: {e}", target.display()),
                );
                format!("could not delete {}: {e}", target.display())
            }
        }
    }

    /// Appends a line to the buffer. Durability is the flush thread's job.
    ///
    /// # Errors
    /// [`Error::NoOpenFile`] if no rotation has succeeded, [`Error::Write`] if the
    /// file rejects the bytes.
    pub fn write(&mut self, line: &str) -> Result<(), Error> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(Error::NoOpenFile);
        };
        writer.write_all(line.as_bytes()).map_err(|e| {
            internal::error("FILE", &format!("Could not write to logfile: {e}"));
            Error::Write(e)
        })
    }

    /// Pushes buffered lines to the file and the file to disk.
    ///
    /// # Errors
    /// [`Error::Write`] if either step fails.
    pub fn flush(&mut self) -> Result<(), Error> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        writer.flush().map_err(Error::Write)?;
        writer.get_ref().sync_data().map_err(Error::Write)
    }

    /// Flushes and drops the open file, if any.
    pub fn close(&mut self) {
        if let Some(mut writer) = self.writer.take()
            && let Err(e) = writer.flush()
        {
            internal::error("FILE", &format!("Could not flush logfile on close: {e}"));
        }
        self.current_path = None;
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.close();
    }
}
