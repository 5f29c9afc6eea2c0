//! Open/closed evaluation of parsed schedules.
//!
//! Matching is pure: no clock is read and no state is shared, so callers are
//! free to evaluate entities on any thread. Collection-level helpers always
//! return identifiers in input order.

use chrono::NaiveDateTime;
use std::collections::HashSet;

use super::cache::ScheduleCache;
use crate::models::{Query, Schedule};
use crate::parsing::parse_schedule;

/// Whether any period of `schedule` covers `query`.
pub fn is_open(schedule: &Schedule, query: Query) -> bool {
    schedule.iter().any(|period| period.contains(query))
}

/// Parse `hours` and test it against `query`.
pub fn is_open_str(hours: &str, query: Query) -> bool {
    is_open(&parse_schedule(hours), query)
}

/// Test `schedule` against a local timestamp.
pub fn is_open_at(schedule: &Schedule, timestamp: &NaiveDateTime) -> bool {
    is_open(schedule, Query::from_datetime(timestamp))
}

/// Identifiers of the entities whose hours string is open at `query`.
///
/// Each identifier is emitted at most once; when an identifier repeats, only
/// its first record is considered.
pub fn filter_open<I, K, H>(entities: I, query: Query) -> Vec<String>
where
    I: IntoIterator<Item = (K, H)>,
    K: AsRef<str>,
    H: AsRef<str>,
{
    collect_open(entities, |_, hours| is_open_str(hours, query))
}

/// Same as [`filter_open`], reusing parses held in `cache`.
pub fn filter_open_cached<I, K, H>(cache: &ScheduleCache, entities: I, query: Query) -> Vec<String>
where
    I: IntoIterator<Item = (K, H)>,
    K: AsRef<str>,
    H: AsRef<str>,
{
    collect_open(entities, |id, hours| {
        is_open(&cache.get_or_parse(id, hours), query)
    })
}

/// Identifiers open at a local calendar timestamp.
pub fn search_open_at<I, K, H>(entities: I, timestamp: &NaiveDateTime) -> Vec<String>
where
    I: IntoIterator<Item = (K, H)>,
    K: AsRef<str>,
    H: AsRef<str>,
{
    filter_open(entities, Query::from_datetime(timestamp))
}

fn collect_open<I, K, H, F>(entities: I, mut open: F) -> Vec<String>
where
    I: IntoIterator<Item = (K, H)>,
    K: AsRef<str>,
    H: AsRef<str>,
    F: FnMut(&str, &str) -> bool,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for (id, hours) in entities {
        let id = id.as_ref();
        if !seen.insert(id.to_string()) {
            continue;
        }
        if open(id, hours.as_ref()) {
            result.push(id.to_string());
        }
    }

    result
}
