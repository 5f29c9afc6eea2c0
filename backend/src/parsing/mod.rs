//! Parsers for free-text operating-hours data.
//!
//! - [`hours`]: parse weekly hours strings into normalized opening periods
//!
//! # Example
//!
//! ```
//! use open_hours::parsing::parse_schedule;
//!
//! let schedule = parse_schedule("Mon-Fri 11 am - 10 pm / Sat 11 am - 12 pm");
//! assert_eq!(schedule.len(), 2);
//! ```

pub mod hours;

#[cfg(test)]
mod hours_tests;

pub use hours::{parse_clock_time, parse_day_range, parse_schedule};
