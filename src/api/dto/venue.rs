//! DTOs for venue browsing endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{Venue, VenueType};

/// Public representation of a venue.
#[derive(Debug, Serialize)]
pub struct VenueItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub venue_type: VenueType,
    pub name: String,
    pub region: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Venue> for VenueItem {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            venue_type: venue.venue_type,
            name: venue.name,
            region: venue.region,
            lat: venue.location.lat,
            lon: venue.location.lon,
            rating: venue.rating,
            image_url: venue.image_url,
            description: venue.description,
        }
    }
}

/// Query parameters for the radius search.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct NearbyQuery {
    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,

    /// Search radius in meters.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub radius: Option<f64>,
}

/// Response for the radius search.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub radius_m: f64,
    pub items: Vec<VenueItem>,
}
