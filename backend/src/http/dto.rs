//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::{Restaurant, Schedule};
use crate::services::cache::CacheStats;

pub use crate::services::search::SearchResult;

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub datetime: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Catalog store status
    pub catalog: String,
    pub cache: CacheStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantDto {
    pub id: i64,
    pub name: String,
    pub hours: String,
}

impl From<Restaurant> for RestaurantDto {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id.value(),
            name: restaurant.name,
            hours: restaurant.hours,
        }
    }
}

/// Restaurant list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantListResponse {
    pub restaurants: Vec<RestaurantDto>,
    pub total: usize,
}

/// Request body for adding a restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub hours: String,
}

/// Request body for replacing a restaurant's hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHoursRequest {
    pub hours: String,
}

/// Request body for the hours parser endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseHoursRequest {
    pub hours: String,
}

/// Parsed periods for an hours string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseHoursResponse {
    pub hours: String,
    pub periods: Schedule,
}
