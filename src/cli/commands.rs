//! Subcommand implementations. Each returns an exit code and reports
//! problems through [`crate::internal`].

use crate::clock::{CalendarDate, Clock, SystemClock};
use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::{Layout, PathStrategy};
use crate::retention::compute_expiry_date;
use std::process::ExitCode;

/// Accepts a signed integer or a level name.
#[must_use]
pub fn parse_priority(s: &str) -> Option<i32> {
    s.trim()
        .parse::<i32>()
        .ok()
        .or_else(|| s.parse::<Level>().ok().map(Level::priority))
}

#[must_use]
pub fn cmd_log(
    config: &Config,
    priority: &str,
    run_id: Option<i64>,
    message: &[String],
) -> ExitCode {
    let Some(priority) = parse_priority(priority) else {
        internal::error("CLI", &format!("Invalid priority: {priority}"));
        return ExitCode::FAILURE;
    };

    let logger = match Logger::from_config(config) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &format!("Could not start logger: {e}"));
            return ExitCode::FAILURE;
        }
    };

    if let Some(run_id) = run_id {
        logger.set_run_id(run_id);
    }

    let result = logger.log(priority, &message.join(" "));
    logger.shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Entry not written: {e}"));
            ExitCode::FAILURE
        }
    }
}

#[must_use]
pub fn cmd_expiry(config: &Config, date: &str, days: u32) -> ExitCode {
    let today = match CalendarDate::parse(date) {
        Ok(d) => d,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    match compute_expiry_date(today, days) {
        None => println!("retention disabled, nothing is deleted"),
        Some(expiry) => {
            let flat = PathStrategy::new(Layout::Flat, config.base_dir(), &config.general.host);
            println!("{expiry}\t{}", flat.file_name(expiry));
        }
    }
    ExitCode::SUCCESS
}

#[must_use]
pub fn cmd_path(config: &Config, date: Option<&str>) -> ExitCode {
    let date = match date.map(CalendarDate::parse) {
        None => SystemClock.now().date,
        Some(Ok(d)) => d,
        Some(Err(e)) => {
            internal::error("CLI", &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let paths = PathStrategy::new(config.file.layout, config.base_dir(), &config.general.host);
    println!("{}", paths.path(date).display());
    ExitCode::SUCCESS
}
