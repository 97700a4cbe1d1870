//! Priority labels. Callers log with plain signed integers; the label table
//! turns them into the bracketed tag written on every line.

use std::fmt;
use std::str::FromStr;

/// Named priorities, ordered so the threshold comparison reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Written to console and file only; below any sensible remote threshold.
    Local = -1,
    /// Diagnostics too noisy for the shared store.
    Debug = 0,
    /// Normal operational messages. The default remote threshold.
    #[default]
    Message = 1,
    /// Anomalies an operator may want to look at.
    Warning = 2,
    /// Failures of a single operation.
    Error = 3,
    /// Failures that stop data taking.
    Fatal = 4,
}

/// Indexed by `priority + 1`.
const LABELS: [Level; 6] = [
    Level::Local,
    Level::Debug,
    Level::Message,
    Level::Warning,
    Level::Error,
    Level::Fatal,
];

impl Level {
    /// Resolves any integer priority. Values outside the table clamp to the
    /// nearest end, so an unexpected priority still produces a line.
    #[must_use]
    pub fn from_priority(priority: i32) -> Self {
        let index = priority.saturating_add(1).clamp(0, 5);
        LABELS[usize::try_from(index).unwrap_or(0)]
    }

    /// The integer written to the remote store.
    #[must_use]
    pub const fn priority(self) -> i32 {
        self as i32
    }

    /// Uppercase label used inside `[...]` on each line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Debug => "DEBUG",
            Self::Message => "MESSAGE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Every level, lowest priority first.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        LABELS
    }
}

/// Label for a raw priority, with the same clamping as [`Level::from_priority`].
#[must_use]
pub fn label(priority: i32) -> &'static str {
    Level::from_priority(priority).as_str()
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.priority()
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "debug" => Ok(Self::Debug),
            "message" | "msg" | "info" => Ok(Self::Message),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
