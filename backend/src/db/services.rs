//! High-level catalog service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers and the server
//! bootstrap. They work with any [`RestaurantRepository`] implementation.
//!
//! # Usage
//!
//! ```no_run
//! use open_hours::db::{services, LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let imported = services::import_catalog(&repo, "data/restaurants.csv", true).await?;
//!     println!("Imported {} restaurants", imported);
//!     Ok(())
//! }
//! ```

use anyhow::Context;
use log::info;
use std::path::Path;

use super::repository::{RepositoryResult, RestaurantRepository};
use crate::io::loaders::load_restaurants_csv;
use crate::models::{NewRestaurant, Restaurant, RestaurantId};
use crate::services::cache::ScheduleCache;

/// Check if the catalog store is healthy.
pub async fn health_check<R>(repo: &R) -> RepositoryResult<bool>
where
    R: RestaurantRepository + ?Sized,
{
    repo.health_check().await
}

/// List every restaurant in insertion order.
pub async fn list_restaurants<R>(repo: &R) -> RepositoryResult<Vec<Restaurant>>
where
    R: RestaurantRepository + ?Sized,
{
    repo.list_restaurants().await
}

/// Store a single restaurant.
pub async fn store_restaurant<R>(repo: &R, restaurant: NewRestaurant) -> RepositoryResult<Restaurant>
where
    R: RestaurantRepository + ?Sized,
{
    let stored = repo.store_restaurant(restaurant).await?;
    info!("Stored restaurant id={} name={:?}", stored.id, stored.name);
    Ok(stored)
}

/// Replace a restaurant's hours and drop its cached schedule.
pub async fn update_hours<R>(
    repo: &R,
    cache: &ScheduleCache,
    id: RestaurantId,
    hours: impl Into<String>,
) -> RepositoryResult<Restaurant>
where
    R: RestaurantRepository + ?Sized,
{
    let updated = repo.update_hours(id, hours.into()).await?;
    cache.invalidate(&id.to_string());
    info!("Updated hours for restaurant id={}", id);
    Ok(updated)
}

/// Load a `name,hours` CSV file and bulk-insert its rows.
///
/// Returns the number of restaurants stored. Unusable rows are skipped by the
/// loader and reported in the log.
pub async fn import_catalog<R, P>(repo: &R, path: P, has_header: bool) -> anyhow::Result<usize>
where
    R: RestaurantRepository + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let loaded = load_restaurants_csv(path, has_header)?;
    let skipped = loaded.skipped_rows;

    let stored = repo
        .bulk_insert(loaded.restaurants)
        .await
        .with_context(|| format!("Failed to store catalog from {}", path.display()))?;

    info!(
        "Imported {} restaurants from {} ({} rows skipped)",
        stored,
        path.display(),
        skipped
    );
    Ok(stored)
}
