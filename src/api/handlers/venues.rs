//! Handlers for venue browsing endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pagination::{ListResponse, PaginationMeta, VenueListParams};
use crate::api::dto::venue::{NearbyQuery, NearbyResponse, VenueItem};
use crate::application::services::venue_service::DEFAULT_RADIUS_M;
use crate::domain::entities::{GeoPoint, VenueType};
use crate::domain::repositories::VenueFilter;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::geo;

/// Parses the `{type}` path segment.
fn parse_venue_type(raw: &str) -> Result<VenueType, AppError> {
    raw.parse::<VenueType>().map_err(|e| {
        AppError::bad_request(
            e.to_string(),
            json!({"allowed": ["lodging", "dining", "attraction"]}),
        )
    })
}

/// Lists venues of one type.
///
/// # Endpoint
///
/// `GET /api/venues/{type}`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 25, max: 100)
/// - `region` (optional): Region name, case-insensitive
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown type or invalid pagination.
pub async fn venue_list_handler(
    State(state): State<AppState>,
    Path(venue_type): Path<String>,
    Query(params): Query<VenueListParams>,
) -> Result<Json<ListResponse<VenueItem>>, AppError> {
    let venue_type = parse_venue_type(&venue_type)?;

    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = params.pagination.page.unwrap_or(1);
    let page_size = params.pagination.page_size.unwrap_or(25);

    let filter = VenueFilter::new(offset, limit).with_region(params.region);
    let (venues, total_items) = state
        .venue_service
        .list_venues(venue_type, filter)
        .await?;

    Ok(Json(ListResponse {
        pagination: PaginationMeta::new(page, page_size, total_items),
        items: venues.into_iter().map(VenueItem::from).collect(),
    }))
}

/// Returns a single venue.
///
/// # Endpoint
///
/// `GET /api/venues/{type}/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no venue of that type has the ID.
pub async fn venue_detail_handler(
    State(state): State<AppState>,
    Path((venue_type, id)): Path<(String, i64)>,
) -> Result<Json<VenueItem>, AppError> {
    let venue_type = parse_venue_type(&venue_type)?;
    let venue = state.venue_service.get_venue(venue_type, id).await?;

    Ok(Json(VenueItem::from(venue)))
}

/// Lists venues around a point, nearest first.
///
/// # Endpoint
///
/// `GET /api/venues/{type}/nearby?lat=..&lon=..&radius=..`
///
/// `radius` is in meters (default 5000, max 50000).
///
/// # Errors
///
/// Returns 400 Bad Request for invalid coordinates or radius.
pub async fn venue_nearby_handler(
    State(state): State<AppState>,
    Path(venue_type): Path<String>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<NearbyResponse>, AppError> {
    let venue_type = parse_venue_type(&venue_type)?;
    query.validate()?;

    let origin = GeoPoint::new(query.lat, query.lon);
    if !geo::is_valid(origin) {
        return Err(AppError::bad_request(
            "Invalid coordinates",
            json!({"lat": query.lat.to_string(), "lon": query.lon.to_string()}),
        ));
    }

    let radius_m = query.radius.unwrap_or(DEFAULT_RADIUS_M);
    let venues = state
        .venue_service
        .nearby(venue_type, origin, radius_m)
        .await?;

    Ok(Json(NearbyResponse {
        radius_m,
        items: venues.into_iter().map(VenueItem::from).collect(),
    }))
}
