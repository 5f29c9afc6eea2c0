//! Repository trait for the restaurant catalog.
//!
//! - [`error`]: Error types for repository operations
//!
//! Storage backends implement [`RestaurantRepository`]; everything above the
//! `db` module (search, HTTP handlers, the catalog loader) only talks to the
//! trait.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::models::{NewRestaurant, Restaurant, RestaurantId};

/// Catalog storage for restaurants and their raw hours strings.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared by async handlers.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Check that the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store one restaurant and return it with its assigned ID.
    ///
    /// # Errors
    /// `ValidationError` when the name is blank.
    async fn store_restaurant(&self, restaurant: NewRestaurant) -> RepositoryResult<Restaurant>;

    /// Store many restaurants at once. Returns the number stored.
    ///
    /// The batch is validated up front; nothing is stored if any entry is
    /// invalid.
    async fn bulk_insert(&self, restaurants: Vec<NewRestaurant>) -> RepositoryResult<usize>;

    /// All restaurants in insertion order.
    async fn list_restaurants(&self) -> RepositoryResult<Vec<Restaurant>>;

    /// Fetch one restaurant.
    ///
    /// # Errors
    /// `NotFound` when no restaurant has this ID.
    async fn get_restaurant(&self, id: RestaurantId) -> RepositoryResult<Restaurant>;

    /// Replace a restaurant's hours string and return the updated record.
    ///
    /// # Errors
    /// `NotFound` when no restaurant has this ID.
    async fn update_hours(&self, id: RestaurantId, hours: String) -> RepositoryResult<Restaurant>;

    /// Number of stored restaurants.
    async fn count(&self) -> RepositoryResult<usize>;
}
