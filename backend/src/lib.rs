//! # open-hours
//!
//! Weekly opening-hours parsing and "open now" search for a restaurant catalog.
//!
//! Hours are written free-form, e.g. `"Mon-Fri 11 am - 10 pm / Sat 11 am - 12 pm"`.
//! [`parse_schedule`] turns such text into a [`models::Schedule`] of weekly
//! periods; the [`services`] layer matches schedules against a local timestamp.
//!
//! ## Architecture
//!
//! - [`models`]: periods, schedules, restaurant records and timestamp parsing
//! - [`parsing`]: the hours-string parser
//! - [`services`]: availability matching, the schedule cache and search
//! - [`db`]: repository trait, in-memory store, configuration and catalog import
//! - [`io`]: CSV catalog loading
//! - [`http`]: Axum REST API (feature `http-server`)
//!
//! ```
//! use open_hours::{parse_timestamp, search_open_at};
//!
//! let catalog = vec![
//!     ("Dashi", "Mon-Fri 11 am - 10 pm / Sat 10 am - 11 pm"),
//!     ("Night Owl", "Fri-Sat 8 pm - 2 am"),
//! ];
//! let at = parse_timestamp("2026-02-15 0:25").unwrap();
//! assert_eq!(search_open_at(catalog, &at), vec!["Night Owl"]);
//! ```

// RepositoryError carries a full ErrorContext
#![allow(clippy::result_large_err)]

pub mod db;
pub mod io;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use models::{parse_timestamp, Query, Schedule, TimestampError};
pub use parsing::parse_schedule;
pub use services::{filter_open, is_open, search_open_at};
