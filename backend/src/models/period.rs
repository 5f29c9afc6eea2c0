//! Normalized weekly opening intervals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::time::Query;

/// Day index within the week, 0 = Sunday through 6 = Saturday.
pub type DayIndex = u8;

/// Number of days in the weekly cycle.
pub const DAYS_PER_WEEK: DayIndex = 7;

/// Minutes in one day; also the exclusive upper bound for `end_minute`.
pub const MINUTES_PER_DAY: u16 = 1440;

/// One contiguous open interval repeated on a set of weekdays.
///
/// The interval is half-open: `start_minute` is inside it, `end_minute` is not.
/// A period with an empty day set, or with `start_minute >= end_minute`, never
/// matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpeningPeriod {
    days: BTreeSet<DayIndex>,
    start_minute: u16,
    end_minute: u16,
}

impl OpeningPeriod {
    /// Create a period. Day indices outside `0..7` are dropped.
    pub fn new<I>(days: I, start_minute: u16, end_minute: u16) -> Self
    where
        I: IntoIterator<Item = DayIndex>,
    {
        Self {
            days: days.into_iter().filter(|d| *d < DAYS_PER_WEEK).collect(),
            start_minute,
            end_minute,
        }
    }

    pub fn days(&self) -> &BTreeSet<DayIndex> {
        &self.days
    }

    pub fn start_minute(&self) -> u16 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u16 {
        self.end_minute
    }

    /// True when the period can never match a query.
    pub fn is_inert(&self) -> bool {
        self.days.is_empty() || self.start_minute >= self.end_minute
    }

    /// Whether `query` falls on one of the period's days inside `[start, end)`.
    pub fn contains(&self, query: Query) -> bool {
        self.days.contains(&query.day_of_week)
            && self.start_minute <= query.minute_of_day
            && query.minute_of_day < self.end_minute
    }
}

/// Parsed weekly schedule for a single entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    periods: Vec<OpeningPeriod>,
}

impl Schedule {
    pub fn new(periods: Vec<OpeningPeriod>) -> Self {
        Self { periods }
    }

    pub fn periods(&self) -> &[OpeningPeriod] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Number of periods that can match at least one query.
    pub fn usable_periods(&self) -> usize {
        self.periods.iter().filter(|p| !p.is_inert()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OpeningPeriod> {
        self.periods.iter()
    }
}

impl From<Vec<OpeningPeriod>> for Schedule {
    fn from(periods: Vec<OpeningPeriod>) -> Self {
        Self::new(periods)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a OpeningPeriod;
    type IntoIter = std::slice::Iter<'a, OpeningPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
