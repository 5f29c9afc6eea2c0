//! Restaurant search by local timestamp.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use super::availability::filter_open_cached;
use super::cache::ScheduleCache;
use crate::db::repository::{RepositoryError, RestaurantRepository};
use crate::models::{parse_timestamp, Query, Restaurant, TimestampError};

/// Result of a search, echoing the timestamp text it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub datetime: String,
    pub open_restaurants: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid datetime format: {0}")]
    InvalidTimestamp(#[from] TimestampError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Search task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Names of the restaurants open at `query`, in catalog order.
///
/// Schedules are cached per restaurant id.
pub fn open_restaurants(restaurants: &[Restaurant], cache: &ScheduleCache, query: Query) -> Vec<String> {
    let open: HashSet<String> = filter_open_cached(
        cache,
        restaurants.iter().map(|r| (r.id.to_string(), r.hours.as_str())),
        query,
    )
    .into_iter()
    .collect();

    restaurants
        .iter()
        .filter(|r| open.contains(&r.id.to_string()))
        .map(|r| r.name.clone())
        .collect()
}

/// Parse `datetime`, fetch the catalog and evaluate it on the blocking pool.
pub async fn search_open_restaurants<R>(
    repo: &R,
    cache: &Arc<ScheduleCache>,
    datetime: &str,
) -> Result<SearchResult, SearchError>
where
    R: RestaurantRepository + ?Sized,
{
    let timestamp = parse_timestamp(datetime)?;
    let query = Query::from_datetime(&timestamp);
    let restaurants = repo.list_restaurants().await?;

    debug!(
        "Evaluating {} restaurants at day={} minute={}",
        restaurants.len(),
        query.day_of_week,
        query.minute_of_day
    );

    let cache = Arc::clone(cache);
    let open = tokio::task::spawn_blocking(move || open_restaurants(&restaurants, &cache, query)).await?;

    Ok(SearchResult {
        datetime: datetime.to_string(),
        count: open.len(),
        open_restaurants: open,
    })
}
