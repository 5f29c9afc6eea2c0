use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::period::DayIndex;

/// Date-time layouts accepted from callers, tried in order.
pub const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Raised when none of the [`ACCEPTED_FORMATS`] match the caller's string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unable to parse datetime string: {input}")]
pub struct TimestampError {
    input: String,
}

impl TimestampError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The original, unparsed string.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse a caller-supplied local date-time.
///
/// Each of the [`ACCEPTED_FORMATS`] is tried in turn; `MM/DD/YYYY` wins over
/// `DD/MM/YYYY` when both would be valid. Surrounding whitespace is ignored.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = input.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimestampError::new(input))
}

/// A point in the weekly cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: DayIndex,
    /// Minutes since local midnight, 0..1440
    pub minute_of_day: u16,
}

impl Query {
    pub fn new(day_of_week: DayIndex, minute_of_day: u16) -> Self {
        Self {
            day_of_week,
            minute_of_day,
        }
    }

    /// Reduce a calendar timestamp to its weekday and minute, dropping seconds.
    ///
    /// The timestamp is taken as already being in the schedule's local zone.
    pub fn from_datetime<T>(dt: &T) -> Self
    where
        T: Datelike + Timelike,
    {
        Self {
            day_of_week: dt.weekday().num_days_from_sunday() as DayIndex,
            minute_of_day: (dt.hour() * 60 + dt.minute()) as u16,
        }
    }
}

impl From<NaiveDateTime> for Query {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_datetime(&dt)
    }
}
