//! In-memory local repository implementation.
//!
//! Suitable for unit tests, local development and for serving a catalog that
//! is bulk-loaded from CSV at startup. Records are kept in insertion order.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{NewRestaurant, Restaurant, RestaurantId};

/// In-memory local repository.
///
/// # Example
/// ```
/// use open_hours::db::{LocalRepository, RestaurantRepository};
/// use open_hours::models::NewRestaurant;
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let repo = LocalRepository::new();
///     repo.store_restaurant(NewRestaurant::new("Dashi", "Mon-Fri 11 am - 10 pm"))
///         .await
///         .unwrap();
///     assert_eq!(repo.count().await.unwrap(), 1);
/// });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    restaurants: Vec<Restaurant>,
    index: HashMap<RestaurantId, usize>,
    next_id: i64,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            restaurants: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalData {
    fn insert(&mut self, new: NewRestaurant) -> Restaurant {
        let id = RestaurantId::new(self.next_id);
        self.next_id += 1;

        let restaurant = Restaurant {
            id,
            name: new.name,
            hours: new.hours,
        };
        self.index.insert(id, self.restaurants.len());
        self.restaurants.push(restaurant.clone());
        restaurant
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository. IDs restart at 1.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Catalog store is not healthy"));
        }
        Ok(())
    }

    fn validate(restaurant: &NewRestaurant, operation: &str) -> RepositoryResult<()> {
        if restaurant.name.trim().is_empty() {
            return Err(RepositoryError::validation(
                "Restaurant name must not be blank",
                ErrorContext::new(operation)
                    .with_entity("restaurant")
                    .with_details(format!("hours={:?}", restaurant.hours)),
            ));
        }
        Ok(())
    }

    fn not_found(id: RestaurantId, operation: &str) -> RepositoryError {
        RepositoryError::not_found(
            format!("Restaurant {} not found", id),
            ErrorContext::new(operation)
                .with_entity("restaurant")
                .with_entity_id(id),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RestaurantRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn store_restaurant(&self, restaurant: NewRestaurant) -> RepositoryResult<Restaurant> {
        self.check_health()?;
        Self::validate(&restaurant, "store_restaurant")?;
        Ok(self.data.write().insert(restaurant))
    }

    async fn bulk_insert(&self, restaurants: Vec<NewRestaurant>) -> RepositoryResult<usize> {
        self.check_health()?;
        for restaurant in &restaurants {
            Self::validate(restaurant, "bulk_insert")?;
        }

        let count = restaurants.len();
        let mut data = self.data.write();
        for restaurant in restaurants {
            data.insert(restaurant);
        }
        Ok(count)
    }

    async fn list_restaurants(&self) -> RepositoryResult<Vec<Restaurant>> {
        self.check_health()?;
        Ok(self.data.read().restaurants.clone())
    }

    async fn get_restaurant(&self, id: RestaurantId) -> RepositoryResult<Restaurant> {
        self.check_health()?;
        let data = self.data.read();
        data.index
            .get(&id)
            .map(|&pos| data.restaurants[pos].clone())
            .ok_or_else(|| Self::not_found(id, "get_restaurant"))
    }

    async fn update_hours(&self, id: RestaurantId, hours: String) -> RepositoryResult<Restaurant> {
        self.check_health()?;
        let mut data = self.data.write();
        let pos = *data
            .index
            .get(&id)
            .ok_or_else(|| Self::not_found(id, "update_hours"))?;

        let restaurant = &mut data.restaurants[pos];
        restaurant.hours = hours;
        Ok(restaurant.clone())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        self.check_health()?;
        Ok(self.data.read().restaurants.len())
    }
}
