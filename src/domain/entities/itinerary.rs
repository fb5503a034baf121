//! Structured itinerary produced from free-form trip requests.

use serde::Serialize;

use super::venue::VenueType;

/// Coarse time slot attached to a venue request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

/// One venue mention extracted from a clause of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueRequest {
    pub venue_type: VenueType,
    pub time_of_day: Option<TimeOfDay>,
    /// Clause the mention was found in.
    pub source_text: String,
}

impl VenueRequest {
    pub fn new(venue_type: VenueType, time_of_day: Option<TimeOfDay>, source_text: &str) -> Self {
        Self {
            venue_type,
            time_of_day,
            source_text: source_text.to_string(),
        }
    }
}

/// A venue mention that appeared inside a negation window.
///
/// Same shape as [`VenueRequest`]; membership in [`Itinerary::exclusions`]
/// is what marks it as unwanted.
pub type Exclusion = VenueRequest;

/// Parse result for a single planning request.
///
/// Built fresh for every request and never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    /// Lowercase name of the first known region found in the input.
    pub region: Option<String>,
    /// Requested venues in clause order, consecutive same-type entries collapsed.
    pub venue_requests: Vec<VenueRequest>,
    pub exclusions: Vec<Exclusion>,
    pub original_text: String,
}

impl Itinerary {
    /// Returns true if the venue type was excluded anywhere in the input.
    ///
    /// Exclusions are detected per clause but applied to the whole itinerary.
    pub fn is_excluded(&self, venue_type: VenueType) -> bool {
        self.exclusions.iter().any(|ex| ex.venue_type == venue_type)
    }

    /// Venue requests that survive type-level exclusion, in itinerary order.
    pub fn active_requests(&self) -> impl Iterator<Item = &VenueRequest> {
        self.venue_requests
            .iter()
            .filter(|request| !self.is_excluded(request.venue_type))
    }

    /// True when nothing venue-related was recognised.
    pub fn is_empty(&self) -> bool {
        self.venue_requests.is_empty() && self.exclusions.is_empty()
    }
}
