//! `daqlog` command-line tool.
//!
//! Usage:
//!   daqlog log [-p PRIORITY] [-r RUN_ID] <message...>
//!   daqlog expiry <YYYY-MM-DD> <days>
//!   daqlog path [<YYYY-MM-DD>]

use clap::Parser;
use daqlog::cli::{Cli, Command, cmd_expiry, cmd_log, cmd_path};
use daqlog::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    daqlog::internal::set_verbosity(config.parse_verbosity());

    match cli.command {
        Command::Log {
            priority,
            run_id,
            message,
        } => cmd_log(&config, &priority, run_id, &message),
        Command::Expiry { date, days } => cmd_expiry(&config, &date, days),
        Command::Path { date } => cmd_path(&config, date.as_deref()),
    }
}
