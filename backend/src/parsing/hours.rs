//! Free-text weekly hours parser.
//!
//! Turns strings such as `"Mon-Fri, Sat 11 am - 10 pm / Sun 11:30 am - 12:30 am"`
//! into a [`Schedule`] of half-open [`OpeningPeriod`]s.
//!
//! The input is uncurated, so parsing is best-effort: a `/`-separated segment
//! that cannot be read contributes no periods and the rest of the string is
//! still used. [`parse_schedule`] never fails.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};

use crate::models::{DayIndex, OpeningPeriod, Schedule, DAYS_PER_WEEK, MINUTES_PER_DAY};

/// Separator between independent schedule segments.
const SEGMENT_SEPARATOR: char = '/';

/// Separator between day groups inside a segment's day portion.
const DAY_GROUP_SEPARATOR: char = ',';

/// Lower-cased day names and abbreviations, 0 = Sunday.
static DAY_NAMES: Lazy<HashMap<&'static str, DayIndex>> = Lazy::new(|| {
    HashMap::from([
        ("sun", 0),
        ("sunday", 0),
        ("mon", 1),
        ("monday", 1),
        ("tue", 2),
        ("tues", 2),
        ("tuesday", 2),
        ("wed", 3),
        ("wednesday", 3),
        ("thu", 4),
        ("thurs", 4),
        ("thursday", 4),
        ("fri", 5),
        ("friday", 5),
        ("sat", 6),
        ("saturday", 6),
    ])
});

/// Two clock times joined by a dash, e.g. `11:30 am - 2 pm`.
static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)([0-9]{1,2}(?::[0-9]{2})?\s*(?:am|pm))\s*-\s*([0-9]{1,2}(?::[0-9]{2})?\s*(?:am|pm))",
    )
    .expect("time range pattern is valid")
});

/// A single 12-hour clock time, e.g. `11 am` or `9:45pm`.
static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2})(?::([0-9]{2}))?\s*(am|pm)")
        .expect("clock time pattern is valid")
});

/// Parse an hours string into its opening periods.
///
/// Segments are evaluated independently and their periods appended in input
/// order. A time range whose end is before its start runs past midnight and
/// yields two periods: one to midnight on the named days and one from midnight
/// on the following days.
pub fn parse_schedule(hours: &str) -> Schedule {
    let periods = hours
        .split(SEGMENT_SEPARATOR)
        .flat_map(parse_segment)
        .collect::<Vec<_>>();
    Schedule::new(periods)
}

/// Parse one `/`-delimited segment. Returns zero, one or two periods.
pub fn parse_segment(segment: &str) -> Vec<OpeningPeriod> {
    let segment = segment.trim();

    let Some(caps) = TIME_RANGE.captures(segment) else {
        if !segment.is_empty() {
            debug!("Skipping hours segment without a time range: {:?}", segment);
        }
        return Vec::new();
    };

    let (Some(start), Some(end)) = (parse_clock_time(&caps[1]), parse_clock_time(&caps[2]))
    else {
        debug!("Skipping hours segment with an invalid clock time: {:?}", segment);
        return Vec::new();
    };

    // `get(0)` is always present on a successful capture.
    let range_start = caps.get(0).map_or(0, |m| m.start());
    let days = parse_day_portion(&segment[..range_start]);

    if end < start {
        let next_days = days.iter().map(|d| (d + 1) % DAYS_PER_WEEK);
        vec![
            OpeningPeriod::new(days.iter().copied(), start, MINUTES_PER_DAY),
            OpeningPeriod::new(next_days, 0, end),
        ]
    } else {
        vec![OpeningPeriod::new(days, start, end)]
    }
}

/// Resolve every comma-separated day group before the time range into one set.
///
/// An empty day portion resolves to an empty set.
pub fn parse_day_portion(day_portion: &str) -> BTreeSet<DayIndex> {
    day_portion
        .split(DAY_GROUP_SEPARATOR)
        .flat_map(parse_day_range)
        .collect()
}

/// Parse a single day (`"Sat"`) or an inclusive day range (`"Mon-Fri"`).
///
/// Ranges that run backwards wrap through the end of the week, so `"Sat-Sun"`
/// is `[6, 0]`. Unknown names yield no days.
pub fn parse_day_range(token: &str) -> Vec<DayIndex> {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return Vec::new();
    }

    match token.split_once('-') {
        Some((first, last)) => {
            let (Some(first), Some(last)) = (day_index(first.trim()), day_index(last.trim()))
            else {
                debug!("Ignoring unrecognized day range: {:?}", token);
                return Vec::new();
            };
            if first <= last {
                (first..=last).collect()
            } else {
                (first..DAYS_PER_WEEK).chain(0..=last).collect()
            }
        }
        None => {
            let day = day_index(&token);
            if day.is_none() {
                debug!("Ignoring unrecognized day name: {:?}", token);
            }
            day.into_iter().collect()
        }
    }
}

/// Look up a lower-cased day name or abbreviation.
pub fn day_index(name: &str) -> Option<DayIndex> {
    DAY_NAMES.get(name).copied()
}

/// Convert a 12-hour clock time to minutes since midnight.
///
/// `12 am` is midnight and `12 pm` is noon. Minutes default to zero. Out of
/// range values such as `13 pm` or `9:75 am` are converted as written and
/// capped at [`MINUTES_PER_DAY`].
pub fn parse_clock_time(text: &str) -> Option<u16> {
    let caps = CLOCK_TIME.captures(text.trim())?;

    let hour: u16 = caps[1].parse().ok()?;
    let minute: u16 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    let hour = match (caps[3].to_ascii_lowercase().as_str(), hour) {
        ("am", 12) => 0,
        ("pm", h) if h != 12 => h + 12,
        (_, h) => h,
    };

    Some((hour * 60 + minute).min(MINUTES_PER_DAY))
}
