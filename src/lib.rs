//! `daqlog` - logging for long-running data-acquisition control processes.
//!
//! Every entry is:
//! - mirrored to the console,
//! - appended to a day-rotated local file (with optional retention cleanup),
//! - persisted to a shared document collection when its priority clears a threshold.
//!
//! # Example
//!
//! ```
//! use daqlog::{Level, Logger, MemoryCollection};
//! use std::sync::Arc;
//!
//! let dir = std::env::temp_dir().join("daqlog-doc");
//! let store = Arc::new(MemoryCollection::new());
//! let logger = Logger::builder()
//!     .host("reader0")
//!     .threshold(Level::Message)
//!     .remote(Arc::clone(&store))
//!     .file()
//!         .base_dir(&dir)
//!         .retention_days(7)
//!         .done()
//!     .build()
//!     .unwrap();
//!
//! logger.set_run_id(1042);
//! daqlog::entry!(logger, Level::Message, "armed {} boards", 3).unwrap();
//! logger.debug("register dump follows").unwrap();
//! logger.shutdown();
//!
//! assert_eq!(store.len(), 1);
//! # let _ = std::fs::remove_dir_all(dir);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `daqlog` command-line tool

pub mod clock;
pub mod config;
mod error;
pub mod flush;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod remote;
pub mod retention;

#[cfg(feature = "cli")]
pub mod cli;

pub use clock::{CalendarDate, Clock, ManualClock, SystemClock, Timestamp};
pub use config::Config;
pub use error::Error;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use output::{Layout, PathStrategy};
pub use remote::{JsonlCollection, LogDocument, MemoryCollection, RemoteStore};
pub use retention::compute_expiry_date;

/// Build identifier written into every INIT banner. Set `DAQLOG_BUILD_COMMIT`
/// at compile time to embed a commit hash.
pub const BUILD_ID: &str = match option_env!("DAQLOG_BUILD_COMMIT") {
    Some(commit) => commit,
    None => "UNKNOWN",
};

/// Run identifier meaning "no active run".
pub const NO_RUN: i64 = -1;

/// Logs a formatted entry: `entry!(logger, priority, "fmt", args...)`.
///
/// `priority` is anything convertible to `i32`, including [`Level`].
#[macro_export]
macro_rules! entry {
    ($logger:expr, $priority:expr, $($arg:tt)+) => {
        $logger.entry($priority, ::core::format_args!($($arg)+))
    };
}
