use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::date::DateInput;
use crate::error::{CalResult, Error};
use crate::utils::time::{format_event_date, whole_days_until, Clock, SystemClock};

/// A named event on a given date.
///
/// The name is fixed at construction and has no setter. Assigning it is
/// rejected because the field is private:
///
/// ```compile_fail,E0616
/// # use aquacal::components::event::CalendarEvent;
/// fn rename(event: &mut CalendarEvent) {
///     event.name = String::from("Bar"); // error[E0616]: field `name` is private
/// }
/// ```
///
/// Through the public API the name can only be read:
///
/// ```
/// # use aquacal::components::event::CalendarEvent;
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2021, 2, 15).unwrap().and_hms_opt(7, 0, 0).unwrap();
/// let mut event = CalendarEvent::new("Foo", date);
/// event.set_date(date);
/// assert_eq!(event.name(), "Foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarEvent")]
pub struct CalendarEvent {
    name: String,
    date: NaiveDateTime,
}

/// Event as written in config files, before the date is validated
#[derive(Debug, Clone, Deserialize)]
struct RawCalendarEvent {
    name: String,
    date: DateInput,
}

impl TryFrom<RawCalendarEvent> for CalendarEvent {
    type Error = Error;

    fn try_from(raw: RawCalendarEvent) -> Result<Self, Self::Error> {
        CalendarEvent::try_new(raw.name, raw.date)
    }
}

impl CalendarEvent {
    /// Create a new event
    pub fn new(name: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }

    /// Create a new event from an untyped date, rejecting anything that is not a date-time
    pub fn try_new(name: impl Into<String>, date: impl Into<DateInput>) -> CalResult<Self> {
        Ok(Self::new(name, date.into().into_date_time()?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDateTime) {
        self.date = date;
    }

    /// Replace the date from an untyped value; the current date is kept on error
    pub fn try_set_date(&mut self, date: impl Into<DateInput>) -> CalResult<()> {
        self.date = date.into().into_date_time()?;
        Ok(())
    }

    /// Whole days left until the event, zero once it is less than a day away
    pub fn days_left(&self) -> i64 {
        self.days_left_with(&SystemClock)
    }

    pub fn days_left_with<C: Clock + ?Sized>(&self, clock: &C) -> i64 {
        self.days_left_at(clock.now())
    }

    pub fn days_left_at(&self, now: NaiveDateTime) -> i64 {
        whole_days_until(now, self.date)
    }

    /// Human-readable countdown, e.g.
    /// `Only 100 days left until Bar (Tuesday, May 25, 2021 @ 01:00 PM)`
    pub fn get_summary(&self) -> String {
        self.summary_with(&SystemClock)
    }

    pub fn summary_with<C: Clock + ?Sized>(&self, clock: &C) -> String {
        self.summary_at(clock.now())
    }

    pub fn summary_at(&self, now: NaiveDateTime) -> String {
        format!(
            "Only {} days left until {} ({})",
            self.days_left_at(now),
            self.name,
            format_event_date(&self.date)
        )
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, format_event_date(&self.date))
    }
}
