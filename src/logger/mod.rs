//! The logger fans each entry out to the console, the day's file and, above
//! the threshold, the remote collection.
//!
//! One instance per process, constructed explicitly and shared by reference
//! or `Arc`. Shut it down (or drop it) before exit so buffered lines reach disk.

mod builder;
mod from_config;

pub use builder::{FileBuilder, LoggerBuilder};

use crate::clock::Clock;
use crate::flush::FlushScheduler;
use crate::fmt::{compose_line, expand};
use crate::level::{self, Level};
use crate::output::LocalSinks;
use crate::remote::RemoteSink;
use crate::{internal, Error, NO_RUN};

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub struct Logger {
    /// The write lock. Shared with the flush thread.
    sinks: Arc<Mutex<LocalSinks>>,
    clock: Arc<dyn Clock>,
    remote: Option<RemoteSink>,
    threshold: i32,
    host: String,
    run_id: AtomicI64,
    flusher: Mutex<Option<FlushScheduler>>,
    /// Set when no flush thread runs (zero period, or after shutdown); every
    /// entry is flushed immediately.
    write_through: AtomicBool,
    remote_failures: AtomicU64,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("host", &self.host)
            .field("threshold", &self.threshold)
            .field("run_id", &self.run_id())
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn lock(&self) -> MutexGuard<'_, LocalSinks> {
        // A panic elsewhere while holding the lock must not end logging for the process.
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Logs one entry.
    ///
    /// The console line is always attempted. The file line follows, rotating
    /// first when the calendar day has changed. With the lock released, entries
    /// at or above the threshold are persisted remotely; a failed insert is
    /// reported and counted but does not fail the call.
    ///
    /// # Errors
    /// Local failures only: rotation ([`Error::CreateDir`], [`Error::OpenFile`]),
    /// file writes ([`Error::Write`], [`Error::NoOpenFile`]) or console I/O.
    pub fn entry(&self, priority: impl Into<i32>, args: fmt::Arguments<'_>) -> Result<(), Error> {
        let priority = priority.into();
        let now = self.clock.now();
        let message = expand(args);
        let line = compose_line(&now, level::label(priority), &message);

        let local = {
            let mut sinks = self.lock();
            let written = sinks.write_line(&now, &line);
            if self.write_through.load(Ordering::Acquire) && written.is_ok() {
                sinks.flush()
            } else {
                written
            }
        };

        if priority >= self.threshold {
            self.persist(priority, &message);
        }

        local
    }

    fn persist(&self, priority: i32, message: &str) {
        let Some(remote) = &self.remote else {
            return;
        };
        if remote
            .persist(&self.host, message, priority, self.run_id())
            .is_err()
        {
            self.remote_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Logs a message verbatim; braces and percent signs are not interpreted.
    ///
    /// # Errors
    /// See [`Self::entry`].
    pub fn log(&self, priority: impl Into<i32>, msg: &str) -> Result<(), Error> {
        self.entry(priority, format_args!("{msg}"))
    }

    /// Console and file only with the default threshold.
    ///
    /// # Errors
    /// See [`Self::entry`].
    pub fn local(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Local, msg)
    }

    /// # Errors
    /// See [`Self::entry`].
    pub fn debug(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Debug, msg)
    }

    /// # Errors
    /// See [`Self::entry`].
    pub fn message(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Message, msg)
    }

    /// # Errors
    /// See [`Self::entry`].
    pub fn warning(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Warning, msg)
    }

    /// # Errors
    /// See [`Self::entry`].
    pub fn error(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Error, msg)
    }

    /// # Errors
    /// See [`Self::entry`].
    pub fn fatal(&self, msg: &str) -> Result<(), Error> {
        self.log(Level::Fatal, msg)
    }

    /// Tags subsequent persisted documents with a data-taking run.
    pub fn set_run_id(&self, run_id: i64) {
        self.run_id.store(run_id, Ordering::Relaxed);
    }

    /// Back to "no run" (-1).
    pub fn clear_run_id(&self) {
        self.set_run_id(NO_RUN);
    }

    #[must_use]
    pub fn run_id(&self) -> i64 {
        self.run_id.load(Ordering::Relaxed)
    }

    #[must_use]
    pub const fn threshold(&self) -> i32 {
        self.threshold
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Remote inserts that failed since construction.
    #[must_use]
    pub fn remote_failures(&self) -> u64 {
        self.remote_failures.load(Ordering::Relaxed)
    }

    /// Path of the file currently open, if any.
    #[must_use]
    pub fn current_path(&self) -> Option<PathBuf> {
        self.lock().file.current_path().map(PathBuf::from)
    }

    /// Forces a rotation at the current clock time, even within the same day.
    ///
    /// # Errors
    /// See [`crate::output::FileSink::rotate`].
    pub fn rotate(&self) -> Result<(), Error> {
        let now = self.clock.now();
        self.lock().file.rotate(&now)
    }

    /// Flushes buffered lines to disk now instead of waiting for the flush thread.
    ///
    /// # Errors
    /// [`Error::Write`] if the file rejects the flush.
    pub fn flush(&self) -> Result<(), Error> {
        self.lock().flush()
    }

    /// Stops the flush thread, waits for it, then flushes and closes the file.
    /// Idempotent; also runs on drop.
    ///
    /// Entries logged afterwards reopen the day's file and are flushed one by one.
    pub fn shutdown(&self) {
        self.write_through.store(true, Ordering::Release);
        let flusher = self
            .flusher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(mut flusher) = flusher {
            flusher.stop();
        }

        let mut sinks = self.lock();
        if sinks.file.is_open() {
            internal::debug("LOGGER", "Closing logfile");
        }
        let _ = sinks.console.flush();
        sinks.file.close();
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();
    }
}
