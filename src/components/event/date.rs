use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{validation_error, CalResult};

/// A date value as it arrives from untyped sources.
///
/// Only [`DateInput::DateTime`] is accepted as an event date. When
/// deserializing, a string holding an ISO-8601 date-time such as
/// `2021-10-01T13:00:00` becomes `DateTime`; every other string stays `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    DateTime(NaiveDateTime),
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl DateInput {
    /// Short description of the kind of value, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            DateInput::DateTime(_) => "date-time",
            DateInput::Text(_) => "string",
            DateInput::Integer(_) => "integer",
            DateInput::Float(_) => "float",
            DateInput::Bool(_) => "boolean",
        }
    }

    /// Accept the value as an event date, or explain why it is not one
    pub fn into_date_time(self) -> CalResult<NaiveDateTime> {
        match self {
            DateInput::DateTime(date) => Ok(date),
            other => Err(validation_error(
                "date",
                &format!("expected a date-time, got {}", other.kind()),
            )),
        }
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(date: NaiveDateTime) -> Self {
        DateInput::DateTime(date)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(date: DateTime<Tz>) -> Self {
        DateInput::DateTime(date.naive_local())
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Integer(value)
    }
}

impl From<i32> for DateInput {
    fn from(value: i32) -> Self {
        DateInput::Integer(value.into())
    }
}

impl From<f64> for DateInput {
    fn from(value: f64) -> Self {
        DateInput::Float(value)
    }
}

impl From<bool> for DateInput {
    fn from(value: bool) -> Self {
        DateInput::Bool(value)
    }
}
