//! Handler for the trip planner endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::plan::{PlanRequest, PlanResponse};
use crate::domain::entities::GeoPoint;
use crate::error::AppError;
use crate::state::AppState;

/// Parses a free-form trip request and picks the nearest venue for each step.
///
/// # Endpoint
///
/// `POST /api/planner`
///
/// # Request Body
///
/// ```json
/// {
///   "userLocation": { "lat": 35.6971, "lon": -0.6308 },
///   "input": "I want to visit a museum, then have lunch, but no hotels"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "itinerary": {
///     "region": null,
///     "venues": [
///       { "type": "attraction", "timeOfDay": null, "originalText": "i want to visit a museum" },
///       { "type": "dining", "timeOfDay": "afternoon", "originalText": "have lunch" }
///     ],
///     "exclusions": [
///       { "type": "lodging", "timeOfDay": null, "originalText": "but no hotels" }
///     ],
///     "originalInput": "I want to visit a museum, then have lunch, but no hotels"
///   },
///   "venues": [
///     { "id": 4, "type": "attraction", "name": "Musée Ahmed Zabana", "distanceM": 812.0, ... }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not JSON, `input` is missing or empty, or
///   `userLocation` lacks numeric in-range `lat`/`lon`
/// - 503 Service Unavailable if the database cannot be reached
pub async fn plan_handler(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({"reason": rejection.body_text()}),
        )
    })?;
    payload.validate()?;

    let origin = GeoPoint::from(payload.user_location);
    let plan = state
        .planner_service
        .plan(&payload.input, origin)
        .await?;

    tracing::info!(
        region = plan.itinerary.region.as_deref().unwrap_or("-"),
        requests = plan.itinerary.venue_requests.len(),
        exclusions = plan.itinerary.exclusions.len(),
        venues = plan.venues.len(),
        "Trip planned"
    );

    Ok(Json(PlanResponse::from_plan(plan, origin)))
}
