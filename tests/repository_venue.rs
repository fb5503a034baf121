//! PostGIS repository tests.
//!
//! Run with `cargo test -- --ignored` against a database that has the
//! `postgis` extension available; `DATABASE_URL` must point at it.

mod common;

use common::{ALGER, ORAN};
use sqlx::PgPool;
use std::sync::Arc;
use trip_planner::domain::entities::{GeoPoint, VenueType};
use trip_planner::domain::repositories::{VenueFilter, VenueRepository};
use trip_planner::infrastructure::persistence::PgVenueRepository;

#[sqlx::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_find_nearest(pool: PgPool) {
    let near = common::insert_venue(
        &pool,
        VenueType::Dining,
        "Le Cintra",
        Some("Oran"),
        GeoPoint::new(35.6980, -0.6320),
        Some(4.2),
    )
    .await;
    common::insert_venue(
        &pool,
        VenueType::Dining,
        "Le Tantonville",
        Some("Alger"),
        GeoPoint::new(36.7840, 3.0590),
        Some(4.8),
    )
    .await;

    let repo = PgVenueRepository::new(Arc::new(pool));
    let result = repo.find_nearest(VenueType::Dining, None, ORAN).await;

    assert!(result.is_ok());
    let venue = result.unwrap().unwrap();
    assert_eq!(venue.id, near);
    assert_eq!(venue.venue_type, VenueType::Dining);
    assert_eq!(venue.region.as_deref(), Some("Oran"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_find_nearest_respects_region(pool: PgPool) {
    common::insert_venue(
        &pool,
        VenueType::Lodging,
        "Hotel Royal",
        Some("Oran"),
        GeoPoint::new(35.6995, -0.6350),
        None,
    )
    .await;
    let far = common::insert_venue(
        &pool,
        VenueType::Lodging,
        "Hotel El Djazair",
        Some("Alger"),
        GeoPoint::new(36.7470, 3.0640),
        None,
    )
    .await;

    let repo = PgVenueRepository::new(Arc::new(pool));
    let venue = repo
        .find_nearest(VenueType::Lodging, Some("alger".to_string()), ORAN)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(venue.id, far);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_find_nearest_empty_table(pool: PgPool) {
    let repo = PgVenueRepository::new(Arc::new(pool));

    let result = repo.find_nearest(VenueType::Attraction, None, ALGER).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_find_by_id_is_scoped_to_table(pool: PgPool) {
    let id = common::insert_venue(
        &pool,
        VenueType::Attraction,
        "Bardo Museum",
        Some("Alger"),
        GeoPoint::new(36.7580, 3.0400),
        Some(4.6),
    )
    .await;

    let repo = PgVenueRepository::new(Arc::new(pool));

    let found = repo.find_by_id(VenueType::Attraction, id).await.unwrap();
    assert_eq!(found.unwrap().name, "Bardo Museum");

    let other = repo.find_by_id(VenueType::Lodging, id).await.unwrap();
    assert!(other.is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_list_and_count(pool: PgPool) {
    for (name, region, rating) in [
        ("Santa Cruz Fort", "Oran", Some(4.1)),
        ("Bardo Museum", "Alger", Some(4.6)),
        ("Jardin d'Essai", "Alger", None),
    ] {
        common::insert_venue(
            &pool,
            VenueType::Attraction,
            name,
            Some(region),
            ALGER,
            rating,
        )
        .await;
    }

    let repo = PgVenueRepository::new(Arc::new(pool));

    let all = repo
        .list(VenueType::Attraction, VenueFilter::new(0, 10))
        .await
        .unwrap();
    let names: Vec<&str> = all.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Bardo Museum", "Santa Cruz Fort", "Jardin d'Essai"]);

    let alger = repo
        .list(
            VenueType::Attraction,
            VenueFilter::new(0, 10).with_region(Some("ALGER".to_string())),
        )
        .await
        .unwrap();
    assert_eq!(alger.len(), 2);

    assert_eq!(repo.count(VenueType::Attraction, None).await.unwrap(), 3);
    assert_eq!(
        repo.count(VenueType::Attraction, Some("oran".to_string()))
            .await
            .unwrap(),
        1
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_find_within_radius(pool: PgPool) {
    let close = common::insert_venue(
        &pool,
        VenueType::Dining,
        "Le Cintra",
        Some("Oran"),
        GeoPoint::new(35.6980, -0.6320),
        None,
    )
    .await;
    common::insert_venue(
        &pool,
        VenueType::Dining,
        "Le Tantonville",
        Some("Alger"),
        GeoPoint::new(36.7840, 3.0590),
        None,
    )
    .await;

    let repo = PgVenueRepository::new(Arc::new(pool));
    let venues = repo
        .find_within_radius(VenueType::Dining, ORAN, 5_000.0, 100)
        .await
        .unwrap();

    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].id, close);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL with PostGIS"]
async fn test_ping(pool: PgPool) {
    let repo = PgVenueRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
