//! API route configuration.

use crate::api::handlers::{
    plan_handler, region_list_handler, venue_detail_handler, venue_list_handler,
    venue_nearby_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Trip planning routes.
///
/// - `POST /planner` - Parse a trip request and resolve venues
pub fn planner_routes() -> Router<AppState> {
    Router::new().route("/planner", post(plan_handler))
}

/// Read-only browsing routes.
///
/// - `GET /regions`               - Known region names
/// - `GET /venues/{type}`         - Paginated venue listing (optional `region`)
/// - `GET /venues/{type}/nearby`  - Venues within a radius, nearest first
/// - `GET /venues/{type}/{id}`    - Single venue
///
/// `{type}` is `lodging`, `dining` or `attraction` (aliases: `hotels`,
/// `restaurants`, `places`).
pub fn browse_routes() -> Router<AppState> {
    Router::new()
        .route("/regions", get(region_list_handler))
        .route("/venues/{type}", get(venue_list_handler))
        .route("/venues/{type}/nearby", get(venue_nearby_handler))
        .route("/venues/{type}/{id}", get(venue_detail_handler))
}
