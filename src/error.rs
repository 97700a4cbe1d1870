//! Unified error type for all daqlog operations.

use std::path::PathBuf;

/// Error type for daqlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error outside the file write path (config reads, removal).
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Parent directories of a log file could not be created; no file is open.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The log file could not be opened for appending; no file is open.
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The open log file rejected a write or flush.
    Write(std::io::Error),
    /// A write was attempted while no log file is open.
    NoOpenFile,
    /// The remote store refused or failed an insert.
    Remote(String),
    /// The flush thread could not be spawned.
    Spawn(std::io::Error),
    /// A calendar date string could not be parsed.
    InvalidDate(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CreateDir { path, source } => {
                write!(f, "could not create {}: {source}", path.display())
            }
            Self::OpenFile { path, source } => {
                write!(f, "could not open {}: {source}", path.display())
            }
            Self::Write(e) => write!(f, "write failed: {e}"),
            Self::NoOpenFile => write!(f, "no log file is open"),
            Self::Remote(s) => write!(f, "remote insert failed: {s}"),
            Self::Spawn(e) => write!(f, "could not spawn flush thread: {e}"),
            Self::InvalidDate(s) => write!(f, "invalid date: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Write(e) | Self::Spawn(e) => Some(e),
            Self::CreateDir { source, .. } | Self::OpenFile { source, .. } => Some(source),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
