#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use trip_planner::domain::entities::{GeoPoint, RegionCatalog, Venue, VenueType};
use trip_planner::domain::repositories::{VenueFilter, VenueRepository};
use trip_planner::error::AppError;
use trip_planner::state::AppState;
use trip_planner::utils::geo;

/// Central Oran, used as the traveller position in most tests.
pub const ORAN: GeoPoint = GeoPoint {
    lat: 35.6971,
    lon: -0.6308,
};

/// Central Algiers.
pub const ALGER: GeoPoint = GeoPoint {
    lat: 36.7538,
    lon: 3.0588,
};

pub fn test_regions() -> Arc<RegionCatalog> {
    Arc::new(RegionCatalog::from_names(["Alger", "Oran", "Constantine"]))
}

pub fn venue(id: i64, venue_type: VenueType, name: &str, region: &str, location: GeoPoint) -> Venue {
    Venue {
        id,
        venue_type,
        name: name.to_string(),
        region: Some(region.to_string()),
        location,
        rating: Some(4.0),
        image_url: None,
        description: None,
    }
}

/// A small fixture: one venue of each type near Oran and near Algiers.
pub fn sample_venues() -> Vec<Venue> {
    vec![
        venue(1, VenueType::Lodging, "Hotel Royal", "Oran", GeoPoint::new(35.6995, -0.6350)),
        venue(2, VenueType::Lodging, "Hotel El Djazair", "Alger", GeoPoint::new(36.7470, 3.0640)),
        venue(10, VenueType::Dining, "Le Cintra", "Oran", GeoPoint::new(35.6980, -0.6320)),
        venue(11, VenueType::Dining, "Le Tantonville", "Alger", GeoPoint::new(36.7840, 3.0590)),
        venue(20, VenueType::Attraction, "Santa Cruz Fort", "Oran", GeoPoint::new(35.7090, -0.6650)),
        venue(21, VenueType::Attraction, "Bardo Museum", "Alger", GeoPoint::new(36.7580, 3.0400)),
    ]
}

/// In-memory venue store with the same semantics as the PostGIS repository.
pub struct FakeVenueRepository {
    venues: Vec<Venue>,
    unavailable: AtomicBool,
    nearest_calls: AtomicUsize,
}

impl FakeVenueRepository {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self {
            venues,
            unavailable: AtomicBool::new(false),
            nearest_calls: AtomicUsize::new(0),
        }
    }

    /// Makes every call fail as if the database were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn nearest_calls(&self) -> usize {
        self.nearest_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::unavailable("Database unavailable", json!({})));
        }
        Ok(())
    }

    fn matching<'a>(
        &'a self,
        venue_type: VenueType,
        region: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Venue> + 'a {
        self.venues.iter().filter(move |v| {
            v.venue_type == venue_type
                && region.is_none_or(|r| {
                    v.region
                        .as_deref()
                        .is_some_and(|vr| vr.eq_ignore_ascii_case(r))
                })
        })
    }

    fn sorted_by_distance(mut venues: Vec<Venue>, origin: GeoPoint) -> Vec<Venue> {
        venues.sort_by(|a, b| {
            geo::distance_m(origin, a.location).total_cmp(&geo::distance_m(origin, b.location))
        });
        venues
    }
}

#[async_trait]
impl VenueRepository for FakeVenueRepository {
    async fn find_nearest(
        &self,
        venue_type: VenueType,
        region: Option<String>,
        origin: GeoPoint,
    ) -> Result<Option<Venue>, AppError> {
        self.nearest_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let candidates = self.matching(venue_type, region.as_deref()).cloned().collect();
        Ok(Self::sorted_by_distance(candidates, origin).into_iter().next())
    }

    async fn find_by_id(&self, venue_type: VenueType, id: i64) -> Result<Option<Venue>, AppError> {
        self.check()?;
        Ok(self
            .matching(venue_type, None)
            .find(|v| v.id == id)
            .cloned())
    }

    async fn list(
        &self,
        venue_type: VenueType,
        filter: VenueFilter,
    ) -> Result<Vec<Venue>, AppError> {
        self.check()?;
        let mut venues: Vec<Venue> = self
            .matching(venue_type, filter.region.as_deref())
            .cloned()
            .collect();
        venues.sort_by(|a, b| {
            b.rating
                .unwrap_or(f64::MIN)
                .total_cmp(&a.rating.unwrap_or(f64::MIN))
                .then(a.id.cmp(&b.id))
        });

        Ok(venues
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn count(&self, venue_type: VenueType, region: Option<String>) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.matching(venue_type, region.as_deref()).count() as i64)
    }

    async fn find_within_radius(
        &self,
        venue_type: VenueType,
        origin: GeoPoint,
        radius_m: f64,
        limit: i64,
    ) -> Result<Vec<Venue>, AppError> {
        self.check()?;
        let candidates = self
            .matching(venue_type, None)
            .filter(|v| geo::distance_m(origin, v.location) <= radius_m)
            .cloned()
            .collect();

        Ok(Self::sorted_by_distance(candidates, origin)
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn create_test_state() -> (AppState, Arc<FakeVenueRepository>) {
    create_test_state_with(sample_venues(), test_regions())
}

pub fn create_test_state_with(
    venues: Vec<Venue>,
    regions: Arc<RegionCatalog>,
) -> (AppState, Arc<FakeVenueRepository>) {
    let repository = Arc::new(FakeVenueRepository::new(venues));
    let state = AppState::new(repository.clone(), regions);

    (state, repository)
}

pub async fn insert_venue(
    pool: &PgPool,
    venue_type: VenueType,
    name: &str,
    region: Option<&str>,
    location: GeoPoint,
    rating: Option<f64>,
) -> i64 {
    let sql = format!(
        r#"
        INSERT INTO {table} (name, state, lon, lat, location, rating)
        VALUES ($1, $2, $3, $4, ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography, $5)
        RETURNING id
        "#,
        table = venue_type.table_name()
    );

    sqlx::query_scalar::<_, i64>(&sql)
        .bind(name)
        .bind(region)
        .bind(location.lon)
        .bind(location.lat)
        .bind(rating)
        .fetch_one(pool)
        .await
        .unwrap()
}
