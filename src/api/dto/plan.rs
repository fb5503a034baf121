//! DTOs for the trip planner endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::venue::VenueItem;
use crate::application::services::TripPlan;
use crate::domain::entities::{GeoPoint, Itinerary, TimeOfDay, VenueRequest, VenueType};
use crate::utils::geo;

/// Request to plan a trip from free-form text.
///
/// ```json
/// { "userLocation": { "lat": 35.69, "lon": -0.63 }, "input": "museum then lunch" }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[validate(nested)]
    pub user_location: UserLocation,

    /// Free-form request; any non-empty string, whitespace included.
    #[validate(length(min = 1, message = "Input text is required"))]
    pub input: String,
}

/// Traveller position used to rank candidate venues.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct UserLocation {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

impl From<UserLocation> for GeoPoint {
    fn from(location: UserLocation) -> Self {
        GeoPoint::new(location.lat, location.lon)
    }
}

/// Planner response: the parsed itinerary and the resolved venues.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub itinerary: ItineraryDto,
    pub venues: Vec<PlannedVenue>,
}

impl PlanResponse {
    pub fn from_plan(plan: TripPlan, origin: GeoPoint) -> Self {
        Self {
            itinerary: ItineraryDto::from(&plan.itinerary),
            venues: plan
                .venues
                .into_iter()
                .map(|venue| {
                    let distance_m = geo::distance_m(origin, venue.location).round();
                    PlannedVenue {
                        venue: VenueItem::from(venue),
                        distance_m,
                    }
                })
                .collect(),
        }
    }
}

/// A resolved venue annotated with its distance from the traveller.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedVenue {
    #[serde(flatten)]
    pub venue: VenueItem,
    pub distance_m: f64,
}

/// Wire form of [`Itinerary`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDto {
    pub region: Option<String>,
    pub venues: Vec<VenueRequestDto>,
    pub exclusions: Vec<VenueRequestDto>,
    pub original_input: String,
}

impl From<&Itinerary> for ItineraryDto {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            region: itinerary.region.clone(),
            venues: itinerary.venue_requests.iter().map(Into::into).collect(),
            exclusions: itinerary.exclusions.iter().map(Into::into).collect(),
            original_input: itinerary.original_text.clone(),
        }
    }
}

/// Wire form of [`VenueRequest`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRequestDto {
    #[serde(rename = "type")]
    pub venue_type: VenueType,
    pub time_of_day: Option<TimeOfDay>,
    pub original_text: String,
}

impl From<&VenueRequest> for VenueRequestDto {
    fn from(request: &VenueRequest) -> Self {
        Self {
            venue_type: request.venue_type,
            time_of_day: request.time_of_day,
            original_text: request.source_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_request() {
        let request: PlanRequest = serde_json::from_value(json!({
            "userLocation": {"lat": 36.75, "lon": 3.06},
            "input": "visit a museum"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_whitespace_input_accepted() {
        let request: PlanRequest = serde_json::from_value(json!({
            "userLocation": {"lat": 36.75, "lon": 3.06},
            "input": "   "
        }))
        .unwrap();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_input_rejected() {
        let request: PlanRequest = serde_json::from_value(json!({
            "userLocation": {"lat": 36.75, "lon": 3.06},
            "input": ""
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_out_of_range_location_rejected() {
        let request: PlanRequest = serde_json::from_value(json!({
            "userLocation": {"lat": 91.0, "lon": 3.06},
            "input": "museum"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_numeric_location_fails_to_deserialize() {
        let result = serde_json::from_value::<PlanRequest>(json!({
            "userLocation": {"lat": "36.75", "lon": 3.06},
            "input": "museum"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_itinerary_wire_format() {
        let itinerary = Itinerary {
            region: Some("oran".to_string()),
            venue_requests: vec![VenueRequest::new(
                VenueType::Dining,
                Some(TimeOfDay::Afternoon),
                "have lunch",
            )],
            exclusions: vec![],
            original_text: "Have lunch in Oran".to_string(),
        };

        let value = serde_json::to_value(ItineraryDto::from(&itinerary)).unwrap();

        assert_eq!(
            value,
            json!({
                "region": "oran",
                "venues": [{"type": "dining", "timeOfDay": "afternoon", "originalText": "have lunch"}],
                "exclusions": [],
                "originalInput": "Have lunch in Oran"
            })
        );
    }
}
