//! PostgreSQL/PostGIS implementation of the venue repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{GeoPoint, Venue, VenueType};
use crate::domain::repositories::{VenueFilter, VenueRepository};
use crate::error::AppError;

const VENUE_COLUMNS: &str = "id, name, state AS region, lon, lat, rating, image_url, description";

/// Row shape shared by the `hotels`, `restaurant` and `places` tables.
#[derive(Debug, FromRow)]
struct VenueRow {
    id: i64,
    name: String,
    region: Option<String>,
    lon: f64,
    lat: f64,
    rating: Option<f64>,
    image_url: Option<String>,
    description: Option<String>,
}

impl VenueRow {
    fn into_venue(self, venue_type: VenueType) -> Venue {
        Venue {
            id: self.id,
            venue_type,
            name: self.name,
            region: self.region,
            location: GeoPoint::new(self.lat, self.lon),
            rating: self.rating,
            image_url: self.image_url,
            description: self.description,
        }
    }
}

/// PostgreSQL repository for venue lookups.
///
/// Distances are computed on the `location geography(Point, 4326)` column.
/// Table names come from [`VenueType::table_name`], never from user input.
pub struct PgVenueRepository {
    pool: Arc<PgPool>,
}

impl PgVenueRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for PgVenueRepository {
    async fn find_nearest(
        &self,
        venue_type: VenueType,
        region: Option<String>,
        origin: GeoPoint,
    ) -> Result<Option<Venue>, AppError> {
        let sql = format!(
            r#"
            SELECT {VENUE_COLUMNS}
            FROM {table}
            WHERE ($3::TEXT IS NULL OR LOWER(state) = LOWER($3::TEXT))
            ORDER BY ST_Distance(location, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography)
            LIMIT 1
            "#,
            table = venue_type.table_name()
        );

        let row = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(origin.lon)
            .bind(origin.lat)
            .bind(region)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(|r| r.into_venue(venue_type)))
    }

    async fn find_by_id(&self, venue_type: VenueType, id: i64) -> Result<Option<Venue>, AppError> {
        let sql = format!(
            "SELECT {VENUE_COLUMNS} FROM {table} WHERE id = $1",
            table = venue_type.table_name()
        );

        let row = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(|r| r.into_venue(venue_type)))
    }

    async fn list(
        &self,
        venue_type: VenueType,
        filter: VenueFilter,
    ) -> Result<Vec<Venue>, AppError> {
        let sql = format!(
            r#"
            SELECT {VENUE_COLUMNS}
            FROM {table}
            WHERE ($1::TEXT IS NULL OR LOWER(state) = LOWER($1::TEXT))
            ORDER BY rating DESC NULLS LAST, id
            LIMIT $2 OFFSET $3
            "#,
            table = venue_type.table_name()
        );

        let rows = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(filter.region)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| r.into_venue(venue_type))
            .collect())
    }

    async fn count(&self, venue_type: VenueType, region: Option<String>) -> Result<i64, AppError> {
        let sql = format!(
            "SELECT COUNT(*) FROM {table} WHERE ($1::TEXT IS NULL OR LOWER(state) = LOWER($1::TEXT))",
            table = venue_type.table_name()
        );

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(region)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn find_within_radius(
        &self,
        venue_type: VenueType,
        origin: GeoPoint,
        radius_m: f64,
        limit: i64,
    ) -> Result<Vec<Venue>, AppError> {
        let sql = format!(
            r#"
            SELECT {VENUE_COLUMNS}
            FROM {table}
            WHERE ST_DWithin(location, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3)
            ORDER BY ST_Distance(location, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography)
            LIMIT $4
            "#,
            table = venue_type.table_name()
        );

        let rows = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(origin.lon)
            .bind(origin.lat)
            .bind(radius_m)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| r.into_venue(venue_type))
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
