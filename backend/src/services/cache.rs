//! Parse-once cache for entity schedules.
//!
//! Entries are keyed by entity identifier and remember the hours string they
//! were parsed from. A lookup with a different hours string re-parses and
//! replaces the entry, so edits to an entity never serve a stale schedule.

use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::models::Schedule;
use crate::parsing::parse_schedule;

struct CachedSchedule {
    hours: String,
    schedule: Arc<Schedule>,
}

/// Hit/miss counters for a [`ScheduleCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Read-mostly map from entity identifier to its parsed schedule.
#[derive(Default)]
pub struct ScheduleCache {
    entries: RwLock<HashMap<String, CachedSchedule>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ScheduleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached schedule for `key`, parsing `hours` on a miss or when
    /// the stored hours string differs.
    pub fn get_or_parse(&self, key: &str, hours: &str) -> Arc<Schedule> {
        if let Some(entry) = self.entries.read().get(key) {
            if entry.hours == hours {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Arc::clone(&entry.schedule);
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let schedule = Arc::new(parse_schedule(hours));
        debug!(
            "Parsed hours for {:?} into {} period(s)",
            key,
            schedule.len()
        );

        self.entries.write().insert(
            key.to_string(),
            CachedSchedule {
                hours: hours.to_string(),
                schedule: Arc::clone(&schedule),
            },
        );
        schedule
    }

    /// Drop the entry for `key`. Returns whether one was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
