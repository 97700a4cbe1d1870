//! Fixed-width line layout shared by the console and file sinks.

use crate::clock::{CalendarDate, Timestamp};

/// `YYYY-MM-DD HH:MM:SS.mmm`, always 23 characters for four-digit years.
#[must_use]
pub fn format_timestamp(ts: &Timestamp) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
        ts.date.year, ts.date.month, ts.date.day, ts.hour, ts.minute, ts.second, ts.millis
    )
}

/// `<timestamp> [<LABEL>]: <message>\n`
#[must_use]
pub fn compose_line(ts: &Timestamp, label: &str, message: &str) -> String {
    let stamp = format_timestamp(ts);
    let mut line = String::with_capacity(stamp.len() + label.len() + message.len() + 6);
    line.push_str(&stamp);
    line.push_str(" [");
    line.push_str(label);
    line.push_str("]: ");
    line.push_str(message);
    line.push('\n');
    line
}

/// `YYYYMMDD`, the prefix of flat-layout file names.
#[must_use]
pub fn day_stamp(date: CalendarDate) -> String {
    date.day_number().to_string()
}

/// `MM.DD`, the per-day directory of the hierarchical layout.
#[must_use]
pub fn month_day_bucket(date: CalendarDate) -> String {
    format!("{:02}.{:02}", date.month, date.day)
}
