//! UTC time source. Rotation and line timestamps both read "now" through
//! [`Clock`] so tests can drive day boundaries without waiting for midnight.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use std::fmt;
use std::sync::Mutex;

/// Calendar day as plain fields.
///
/// `day` is signed: retention arithmetic can step back past the start of a
/// month by more than the previous month's length and the result is kept
/// as-is rather than normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    /// 1 to 12.
    pub month: u32,
    pub day: i32,
}

impl CalendarDate {
    #[must_use]
    pub const fn new(year: i32, month: u32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// The `YYYYMMDD` integer used to detect day changes and to name flat log files.
    #[must_use]
    pub fn day_number(self) -> i64 {
        i64::from(self.year) * 10_000 + i64::from(self.month) * 100 + i64::from(self.day)
    }

    /// Parses `YYYY-MM-DD`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidDate`] for anything chrono rejects.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|e| crate::Error::InvalidDate(format!("{s}: {e}")))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: i32::try_from(date.day()).unwrap_or(1),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A point in time at millisecond resolution, split into UTC calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub date: CalendarDate,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Millisecond of the second, 0 to 999.
    pub millis: u32,
}

impl Timestamp {
    #[must_use]
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        // Leap seconds report nanos >= 1e9; keep the field three digits wide.
        let millis = (dt.nanosecond() / 1_000_000).min(999);
        Self {
            date: CalendarDate::from(dt.date()),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            millis,
        }
    }

    #[must_use]
    pub fn day_number(&self) -> i64 {
        self.date.day_number()
    }
}

/// Anything that can say what time it is. Must not go backwards within a process.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(Utc::now().naive_utc())
    }
}

/// A clock that only moves when told to. Used to replay day boundaries.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    #[must_use]
    pub const fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Starts at midnight UTC of the given date. Returns `None` for impossible dates.
    #[must_use]
    pub fn at_date(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self::new)
    }

    pub fn set(&self, to: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = to;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self
            .now
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let now = *self
            .now
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Timestamp::from_datetime(now)
    }
}
