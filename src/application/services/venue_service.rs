//! Venue browsing service.

use crate::domain::entities::{GeoPoint, Venue, VenueType};
use crate::domain::repositories::{VenueFilter, VenueRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Largest radius accepted by [`VenueService::nearby`], in meters.
pub const MAX_RADIUS_M: f64 = 50_000.0;
pub const DEFAULT_RADIUS_M: f64 = 5_000.0;
/// Upper bound on rows returned by a radius search.
pub const NEARBY_LIMIT: i64 = 100;

/// Read-only queries over hotels, restaurants and attractions.
pub struct VenueService<R: VenueRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: VenueRepository + ?Sized> VenueService<R> {
    /// Creates a new venue service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists venues of one type together with the total matching count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on database errors.
    pub async fn list_venues(
        &self,
        venue_type: VenueType,
        filter: VenueFilter,
    ) -> Result<(Vec<Venue>, i64), AppError> {
        let region = filter.region.clone();

        tokio::try_join!(
            self.repository.list(venue_type, filter),
            self.repository.count(venue_type, region)
        )
    }

    /// Retrieves one venue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no venue of that type has the ID.
    pub async fn get_venue(&self, venue_type: VenueType, id: i64) -> Result<Venue, AppError> {
        self.repository
            .find_by_id(venue_type, id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Venue not found",
                    json!({"type": venue_type.as_str(), "id": id}),
                )
            })
    }

    /// Lists venues within `radius_m` of `origin`, nearest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the radius is not in `(0, MAX_RADIUS_M]`.
    pub async fn nearby(
        &self,
        venue_type: VenueType,
        origin: GeoPoint,
        radius_m: f64,
    ) -> Result<Vec<Venue>, AppError> {
        if !(radius_m > 0.0 && radius_m <= MAX_RADIUS_M) {
            return Err(AppError::bad_request(
                "Invalid radius",
                json!({"min_exclusive": 0, "max": MAX_RADIUS_M, "got": radius_m}),
            ));
        }

        self.repository
            .find_within_radius(venue_type, origin, radius_m, NEARBY_LIMIT)
            .await
    }

    /// Checks that the venue store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
