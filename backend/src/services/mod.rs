//! Availability evaluation and restaurant search.
//!
//! Parsing lives in [`crate::parsing`]; this module answers "what is open
//! right now" against parsed schedules, with an optional parse cache.

pub mod availability;
pub mod cache;
pub mod search;


pub use availability::{filter_open, filter_open_cached, is_open, is_open_at, is_open_str, search_open_at};
pub use cache::{CacheStats, ScheduleCache};
pub use search::{open_restaurants, search_open_restaurants, SearchError, SearchResult};
