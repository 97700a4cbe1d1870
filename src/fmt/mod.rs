//! Text rendering: timestamps, full log lines, typed message expansion and
//! the date fragments that appear in log paths.

mod line;
mod message;

pub use line::{compose_line, day_stamp, format_timestamp, month_day_bucket};
pub use message::{expand, measure};
