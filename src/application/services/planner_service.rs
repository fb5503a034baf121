//! Trip planning service: parses a request and resolves it into venues.

use std::sync::Arc;

use crate::domain::entities::{GeoPoint, Itinerary, Venue};
use crate::domain::parser::ItineraryParser;
use crate::domain::repositories::VenueRepository;
use crate::error::AppError;

/// Parsed itinerary together with the venues chosen for it.
#[derive(Debug, Clone)]
pub struct TripPlan {
    pub itinerary: Itinerary,
    pub venues: Vec<Venue>,
}

/// Service turning free-form trip requests into concrete venues.
///
/// Parsing is pure and in-memory. Resolution issues one nearest-venue query
/// per surviving request, sequentially and in itinerary order.
pub struct PlannerService<R: VenueRepository + ?Sized> {
    parser: Arc<ItineraryParser>,
    repository: Arc<R>,
}

impl<R: VenueRepository + ?Sized> PlannerService<R> {
    /// Creates a new planner service.
    pub fn new(parser: Arc<ItineraryParser>, repository: Arc<R>) -> Self {
        Self { parser, repository }
    }

    /// Parses `input` and resolves the result near `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    pub async fn plan(&self, input: &str, origin: GeoPoint) -> Result<TripPlan, AppError> {
        let itinerary = self.parser.parse(input);
        let venues = self.resolve(&itinerary, origin).await?;

        Ok(TripPlan { itinerary, venues })
    }

    /// Resolves every non-excluded request to its nearest venue.
    ///
    /// - A request whose type is excluded anywhere in the itinerary is skipped.
    /// - A lookup with no match contributes nothing.
    /// - A lookup failing for any reason other than unavailability is logged
    ///   and skipped.
    /// - The same venue may appear more than once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached;
    /// the whole resolution is abandoned in that case.
    pub async fn resolve(
        &self,
        itinerary: &Itinerary,
        origin: GeoPoint,
    ) -> Result<Vec<Venue>, AppError> {
        let mut venues = Vec::with_capacity(itinerary.venue_requests.len());

        for request in itinerary.active_requests() {
            let lookup = self
                .repository
                .find_nearest(request.venue_type, itinerary.region.clone(), origin)
                .await;

            match lookup {
                Ok(Some(venue)) => venues.push(venue),
                Ok(None) => {
                    tracing::debug!(
                        venue_type = %request.venue_type,
                        region = itinerary.region.as_deref().unwrap_or("-"),
                        "No venue matched request"
                    );
                }
                Err(e) if e.is_unavailable() => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        venue_type = %request.venue_type,
                        error = %e,
                        "Venue lookup failed, skipping request"
                    );
                }
            }
        }

        Ok(venues)
    }
}
