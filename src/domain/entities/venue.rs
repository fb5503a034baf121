//! Venue entity and the closed set of venue types.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of place a traveller can be sent to.
///
/// Each type is backed by its own PostGIS table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Lodging,
    Dining,
    Attraction,
}

impl VenueType {
    /// All venue types, in the order the parser inspects them.
    pub const ALL: [VenueType; 3] = [VenueType::Lodging, VenueType::Dining, VenueType::Attraction];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueType::Lodging => "lodging",
            VenueType::Dining => "dining",
            VenueType::Attraction => "attraction",
        }
    }

    /// Name of the table holding venues of this type.
    pub fn table_name(&self) -> &'static str {
        match self {
            VenueType::Lodging => "hotels",
            VenueType::Dining => "restaurant",
            VenueType::Attraction => "places",
        }
    }
}

impl fmt::Display for VenueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known venue type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown venue type '{0}'")]
pub struct UnknownVenueType(pub String);

impl FromStr for VenueType {
    type Err = UnknownVenueType;

    /// Accepts canonical names and the legacy table-style aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lodging" | "hotel" | "hotels" => Ok(VenueType::Lodging),
            "dining" | "restaurant" | "restaurants" => Ok(VenueType::Dining),
            "attraction" | "attractions" | "place" | "places" => Ok(VenueType::Attraction),
            _ => Err(UnknownVenueType(s.to_string())),
        }
    }
}

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A concrete place stored in one of the venue tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: i64,
    pub venue_type: VenueType,
    pub name: String,
    pub region: Option<String>,
    pub location: GeoPoint,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}
