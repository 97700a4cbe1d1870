//! Tests for expiry-date arithmetic.

use daqlog::retention::days_in_month;
use daqlog::{CalendarDate, compute_expiry_date};

#[test]
fn zero_window_keeps_everything() {
    assert_eq!(compute_expiry_date(CalendarDate::new(2024, 3, 2), 0), None);
    assert_eq!(compute_expiry_date(CalendarDate::new(1999, 12, 31), 0), None);
}

#[test]
fn same_month_subtraction() {
    assert_eq!(
        compute_expiry_date(CalendarDate::new(2025, 7, 20), 7),
        Some(CalendarDate::new(2025, 7, 13))
    );
}

#[test]
fn crosses_into_leap_february() {
    // 2 - 5 = -3, plus 29 days of February 2024.
    assert_eq!(
        compute_expiry_date(CalendarDate::new(2024, 3, 2), 5),
        Some(CalendarDate::new(2024, 2, 26))
    );
}

#[test]
fn crosses_into_common_february() {
    assert_eq!(
        compute_expiry_date(CalendarDate::new(2023, 3, 2), 5),
        Some(CalendarDate::new(2023, 2, 25))
    );
}

#[test]
fn window_equal_to_day_steps_back_a_month() {
    assert_eq!(
        compute_expiry_date(CalendarDate::new(2025, 5, 7), 7),
        Some(CalendarDate::new(2025, 4, 30))
    );
}

#[test]
fn january_wraps_to_previous_december() {
    assert_eq!(
        compute_expiry_date(CalendarDate::new(2025, 1, 3), 5),
        Some(CalendarDate::new(2024, 12, 29))
    );
}

#[test]
fn long_window_leaves_non_positive_day() {
    // Only one month is stepped back: 2 - 40 + 31 (January).
    assert_eq!(
        compute_expiry_date(CalendarDate::new(2025, 2, 2), 40),
        Some(CalendarDate::new(2025, 1, -7))
    );
}

#[test]
fn leap_rule_is_every_fourth_year() {
    assert_eq!(days_in_month(2, 2024), 29);
    assert_eq!(days_in_month(2, 2023), 28);
    // Century years count as leap years here.
    assert_eq!(days_in_month(2, 2100), 29);
    assert_eq!(days_in_month(4, 2024), 30);
    assert_eq!(days_in_month(12, 2023), 31);
}
