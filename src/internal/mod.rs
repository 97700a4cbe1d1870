//! daqlog's own diagnostics: rotation notices, failed directory creation,
//! rejected remote inserts. These cannot go through a [`crate::Logger`]
//! (the file sink is usually the thing that failed), so they are written
//! straight to the console.
//!
//! Output is gated by a process-wide verbosity so `debug` chatter stays off
//! unless asked for. Warnings and errors are always printed.

use crate::level::Level;
use std::io::{self, Write};
use std::sync::atomic::{AtomicI32, Ordering};

static VERBOSITY: AtomicI32 = AtomicI32::new(Level::Message as i32);

/// Lowest level that is still printed. Defaults to [`Level::Message`].
/// Anything above [`Level::Warning`] only silences debug and info reports.
pub fn set_verbosity(level: Level) {
    VERBOSITY.store(level.priority(), Ordering::Relaxed);
}

#[must_use]
pub fn verbosity() -> Level {
    Level::from_priority(VERBOSITY.load(Ordering::Relaxed))
}

/// Whether a report at `level` is printed under the current verbosity.
#[must_use]
pub fn enabled(level: Level) -> bool {
    level >= verbosity().min(Level::Warning)
}

fn report(level: Level, scope: &str, msg: &str) {
    if !enabled(level) {
        return;
    }
    // A closed stdout leaves nowhere else to report to.
    let _ = writeln!(io::stdout().lock(), "[daqlog] {level} {scope}: {msg}");
}

/// Startup and teardown details.
pub fn debug(scope: &str, msg: &str) {
    report(Level::Debug, scope, msg);
}

/// Normal milestones: logging target chosen, file rotated.
pub fn info(scope: &str, msg: &str) {
    report(Level::Message, scope, msg);
}

/// Degraded but continuing: a remote insert was dropped.
pub fn warn(scope: &str, msg: &str) {
    report(Level::Warning, scope, msg);
}

/// Local logging failed for this call.
pub fn error(scope: &str, msg: &str) {
    report(Level::Error, scope, msg);
}
