//! Stepwise construction of a [`Logger`]. File settings live on a sub-builder
//! so the main builder only carries identity, threshold and collaborators.

use super::Logger;
use crate::clock::{Clock, SystemClock};
use crate::flush::FlushScheduler;
use crate::output::{ConsoleSink, FileSink, Layout, LocalSinks, PathStrategy};
use crate::remote::{RemoteSink, RemoteStore};
use crate::{internal, Error, BUILD_ID, NO_RUN};

use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Collects everything a logger needs before any thread is started.
pub struct LoggerBuilder {
    host: String,
    threshold: i32,
    build_id: String,
    clock: Arc<dyn Clock>,
    console: ConsoleSink,
    remote: Option<RemoteSink>,
    file: FileSettings,
}

struct FileSettings {
    base_dir: PathBuf,
    layout: Layout,
    retention_days: u32,
    flush_period: Duration,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Wall clock, stdout, no remote store, flat files under `./logs` flushed every 5 s.
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: "localhost".to_string(),
            threshold: 1,
            build_id: BUILD_ID.to_string(),
            clock: Arc::new(SystemClock),
            console: ConsoleSink::stdout(),
            remote: None,
            file: FileSettings {
                base_dir: PathBuf::from("logs"),
                layout: Layout::Flat,
                retention_days: 0,
                flush_period: Duration::from_secs(5),
            },
        }
    }

    /// Identifies this process in file names and persisted documents.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Entries with `priority >= threshold` are persisted remotely.
    #[must_use]
    pub fn threshold(mut self, threshold: impl Into<i32>) -> Self {
        self.threshold = threshold.into();
        self
    }

    /// Replaces the compiled-in build identifier shown in the INIT banner.
    #[must_use]
    pub fn build_id(mut self, id: impl Into<String>) -> Self {
        self.build_id = id.into();
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Same as [`Self::clock`] for a clock the caller keeps a handle to.
    #[must_use]
    pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sends console lines somewhere other than stdout.
    #[must_use]
    pub fn console(mut self, target: impl Write + Send + 'static) -> Self {
        self.console = ConsoleSink::new(target);
        self
    }

    #[must_use]
    pub fn remote(mut self, store: impl RemoteStore + 'static) -> Self {
        self.remote = Some(RemoteSink::new(store));
        self
    }

    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder { parent: self }
    }

    /// Starts the flush thread unless the flush period is zero.
    ///
    /// # Errors
    /// [`Error::Spawn`] if the flush thread cannot be started.
    pub fn build(self) -> Result<Logger, Error> {
        let settings = self.file;
        internal::info(
            "LOGGER",
            &format!("Local file logging to {}", settings.base_dir.display()),
        );

        let paths = PathStrategy::new(settings.layout, settings.base_dir, self.host.clone());
        let file = FileSink::new(paths, settings.retention_days, self.build_id);
        let sinks = Arc::new(Mutex::new(LocalSinks::new(self.console, file)));

        let write_through = settings.flush_period.is_zero();
        let flusher = if write_through {
            None
        } else {
            Some(FlushScheduler::start(
                Arc::clone(&sinks),
                settings.flush_period,
            )?)
        };

        Ok(Logger {
            sinks,
            clock: self.clock,
            remote: self.remote,
            threshold: self.threshold,
            host: self.host,
            run_id: AtomicI64::new(NO_RUN),
            flusher: Mutex::new(flusher),
            write_through: AtomicBool::new(write_through),
            remote_failures: AtomicU64::new(0),
        })
    }
}

/// File output settings.
pub struct FileBuilder {
    parent: LoggerBuilder,
}

impl FileBuilder {
    /// Root of the log tree.
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.parent.file.base_dir = dir.into();
        self
    }

    #[must_use]
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.parent.file.layout = layout;
        self
    }

    /// 0 keeps files forever.
    #[must_use]
    pub const fn retention_days(mut self, days: u32) -> Self {
        self.parent.file.retention_days = days;
        self
    }

    /// Zero disables the flush thread and flushes after every entry instead.
    #[must_use]
    pub const fn flush_period(mut self, period: Duration) -> Self {
        self.parent.file.flush_period = period;
        self
    }

    #[must_use]
    pub fn done(self) -> LoggerBuilder {
        self.parent
    }
}
