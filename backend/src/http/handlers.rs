//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateRestaurantRequest, HealthResponse, ParseHoursRequest, ParseHoursResponse,
    RestaurantDto, RestaurantListResponse, SearchQuery, SearchResult, UpdateHoursRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::{NewRestaurant, RestaurantId};
use crate::parsing::parse_schedule;
use crate::services::search::search_open_restaurants;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let catalog = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        catalog,
        cache: state.cache.stats(),
    }))
}

// =============================================================================
// Search
// =============================================================================

/// GET /api/v1/restaurants/search?datetime=...
///
/// Restaurants open at the given local timestamp, in catalog order.
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> HandlerResult<SearchResult> {
    let datetime = params
        .datetime
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("datetime parameter required".to_string()))?;

    let result = search_open_restaurants(state.repository.as_ref(), &state.cache, &datetime).await?;
    Ok(Json(result))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /api/v1/restaurants
pub async fn list_restaurants(State(state): State<AppState>) -> HandlerResult<RestaurantListResponse> {
    let restaurants: Vec<RestaurantDto> = db_services::list_restaurants(state.repository.as_ref())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let total = restaurants.len();

    Ok(Json(RestaurantListResponse { restaurants, total }))
}

/// POST /api/v1/restaurants
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(request): Json<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<RestaurantDto>), AppError> {
    let stored = db_services::store_restaurant(
        state.repository.as_ref(),
        NewRestaurant::new(request.name, request.hours),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// GET /api/v1/restaurants/{id}
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<RestaurantDto> {
    let restaurant = state.repository.get_restaurant(RestaurantId::new(id)).await?;
    Ok(Json(restaurant.into()))
}

/// PUT /api/v1/restaurants/{id}/hours
pub async fn update_hours(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateHoursRequest>,
) -> HandlerResult<RestaurantDto> {
    let updated = db_services::update_hours(
        state.repository.as_ref(),
        &state.cache,
        RestaurantId::new(id),
        request.hours,
    )
    .await?;

    Ok(Json(updated.into()))
}

// =============================================================================
// Hours parser
// =============================================================================

/// POST /api/v1/hours/parse
///
/// Never fails on malformed text; unreadable segments are simply absent.
pub async fn parse_hours(Json(request): Json<ParseHoursRequest>) -> HandlerResult<ParseHoursResponse> {
    let periods = parse_schedule(&request.hours);
    Ok(Json(ParseHoursResponse {
        hours: request.hours,
        periods,
    }))
}
