//! Command-line interface, for emitting entries from shell scripts and
//! for checking where files land and which one a rotation would delete.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// daqlog - log to console, rotated files and the shared collection.
#[derive(Parser)]
#[command(name = "daqlog", version, about = "Data-acquisition logging")]
pub struct Cli {
    /// Config file (defaults to the per-user config location)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log one entry.
    Log {
        /// Priority: -1..4 or a name (local, debug, message, warning, error, fatal)
        #[arg(short, long, default_value = "message", allow_hyphen_values = true)]
        priority: String,
        /// Run identifier attached to the persisted document
        #[arg(short, long, allow_hyphen_values = true)]
        run_id: Option<i64>,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Show which date's file a rotation on DATE would delete.
    Expiry {
        /// Rotation date (YYYY-MM-DD)
        date: String,
        /// Retention window in days
        days: u32,
    },
    /// Show the log file path for a date.
    Path {
        /// Date (YYYY-MM-DD); today in UTC when omitted
        date: Option<String>,
    },
}

pub use commands::{cmd_expiry, cmd_log, cmd_path, parse_priority};
