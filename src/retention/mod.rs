//! Retention arithmetic. Each rotation deletes the one log file that has just
//! fallen out of the retention window; this module computes which date that is.
//!
//! The arithmetic is intentionally simple and its quirks are kept stable so
//! the files it names stay consistent across versions:
//! - leap years are `year % 4 == 0`, evaluated on *today's* year;
//! - at most one month is stepped back, so a window longer than the previous
//!   month leaves a non-positive day that names no real file.

use crate::clock::CalendarDate;

const DAYS_PER_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Length of `month` (1-based) with February lengthened when `leap_year` is divisible by four.
#[must_use]
pub fn days_in_month(month: u32, leap_year: i32) -> i32 {
    let index = usize::try_from(month.clamp(1, 12) - 1).unwrap_or(0);
    let days = DAYS_PER_MONTH[index];
    if month == 2 && leap_year % 4 == 0 {
        days + 1
    } else {
        days
    }
}

/// The date whose log file should be removed today, or `None` when the window is 0
/// (keep forever).
#[must_use]
pub fn compute_expiry_date(today: CalendarDate, window_days: u32) -> Option<CalendarDate> {
    if window_days == 0 {
        return None;
    }

    let window = i32::try_from(window_days).unwrap_or(i32::MAX);
    let mut expiry = today;
    expiry.day = today.day.saturating_sub(window);

    if expiry.day <= 0 {
        if expiry.month <= 1 {
            expiry.year -= 1;
            expiry.month = 12;
        } else {
            expiry.month -= 1;
        }
        expiry.day += days_in_month(expiry.month, today.year);
    }

    Some(expiry)
}
