//! Repository trait for venue lookups.

use crate::domain::entities::{GeoPoint, Venue, VenueType};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter criteria for venue listings.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueFilter {
    /// Case-insensitive region name; `None` means any region.
    pub region: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

impl VenueFilter {
    /// Creates a new filter with pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            region: None,
            offset,
            limit,
        }
    }

    /// Restricts the listing to one region.
    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

/// Repository interface over the three venue tables.
///
/// All region comparisons are case-insensitive equality.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVenueRepository`] - PostgreSQL/PostGIS implementation
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Every method returns [`AppError::Unavailable`] when the database cannot be
/// reached and [`AppError::Internal`] for any other database failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Finds the venue of `venue_type` closest to `origin`.
    ///
    /// When `region` is `None` the search is not constrained by region.
    /// Returns `Ok(None)` when no venue matches.
    async fn find_nearest(
        &self,
        venue_type: VenueType,
        region: Option<String>,
        origin: GeoPoint,
    ) -> Result<Option<Venue>, AppError>;

    /// Finds a venue by its table ID.
    async fn find_by_id(&self, venue_type: VenueType, id: i64) -> Result<Option<Venue>, AppError>;

    /// Lists venues ordered by rating (best first), then ID.
    async fn list(&self, venue_type: VenueType, filter: VenueFilter)
    -> Result<Vec<Venue>, AppError>;

    /// Counts venues, optionally within one region.
    async fn count(&self, venue_type: VenueType, region: Option<String>) -> Result<i64, AppError>;

    /// Lists venues within `radius_m` meters of `origin`, nearest first.
    async fn find_within_radius(
        &self,
        venue_type: VenueType,
        origin: GeoPoint,
        radius_m: f64,
        limit: i64,
    ) -> Result<Vec<Venue>, AppError>;

    /// Checks database connectivity.
    async fn ping(&self) -> Result<(), AppError>;
}
