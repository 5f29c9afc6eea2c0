//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::RestaurantRepository;
use crate::services::cache::ScheduleCache;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog store
    pub repository: Arc<dyn RestaurantRepository>,
    /// Parsed schedules keyed by restaurant id
    pub cache: Arc<ScheduleCache>,
}

impl AppState {
    /// Create a new application state with an empty schedule cache.
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self {
            repository,
            cache: Arc::new(ScheduleCache::new()),
        }
    }
}
