//! Coordinate helpers.

use crate::domain::entities::GeoPoint;

/// Great-circle distance between two points in meters.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let km = haversine::distance(
        haversine::Location {
            latitude: a.lat,
            longitude: a.lon,
        },
        haversine::Location {
            latitude: b.lat,
            longitude: b.lon,
        },
        haversine::Units::Kilometers,
    );

    km * 1000.0
}

/// True when both coordinates are finite and within WGS84 bounds.
pub fn is_valid(point: GeoPoint) -> bool {
    point.lat.is_finite()
        && point.lon.is_finite()
        && (-90.0..=90.0).contains(&point.lat)
        && (-180.0..=180.0).contains(&point.lon)
}
