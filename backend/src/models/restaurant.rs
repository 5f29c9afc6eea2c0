//! Catalog records for the restaurant search service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository-assigned restaurant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(pub i64);

impl RestaurantId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored restaurant with its raw hours string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub hours: String,
}

/// A restaurant that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub hours: String,
}

impl NewRestaurant {
    pub fn new(name: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hours: hours.into(),
        }
    }
}
