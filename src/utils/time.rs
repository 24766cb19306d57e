use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Format used for event dates in summaries, e.g. `Tuesday, May 25, 2021 @ 01:00 PM`
pub const EVENT_DATE_FORMAT: &str = "%A, %B %d, %Y @ %I:%M %p";

/// Source of the current local time
pub trait Clock: Send + Sync {
    /// Current wall-clock time, without timezone
    fn now(&self) -> NaiveDateTime;

    /// Current calendar date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Freeze the clock at midnight of the given date
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::default()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Check whether a date is a Saturday or Sunday
pub fn is_weekend_day(date: NaiveDate) -> bool {
    // Monday is 0, Sunday is 6
    date.weekday().num_days_from_monday() > 4
}

/// Whole days from `now` until `target`, floored and never negative
pub fn whole_days_until(now: NaiveDateTime, target: NaiveDateTime) -> i64 {
    // num_days truncates toward zero, which only differs from flooring
    // for negative spans, and those clamp to zero anyway
    target.signed_duration_since(now).num_days().max(0)
}

/// Format a date-time the way event summaries show it
pub fn format_event_date(date: &NaiveDateTime) -> String {
    date.format(EVENT_DATE_FORMAT).to_string()
}

/// Key used by the holiday API for a date, e.g. `12/25` or `7/4`
pub fn holiday_key(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}
