//! Core domain entities for trip planning.
//!
//! # Entity Types
//!
//! - [`Venue`] - A concrete hotel, restaurant or attraction
//! - [`VenueType`] - The closed set of venue kinds
//! - [`Itinerary`] - Structured parse of a trip request
//! - [`VenueRequest`] / [`Exclusion`] - Venue mentions extracted per clause
//! - [`RegionCatalog`] - Known region names loaded at startup

pub mod itinerary;
pub mod region;
pub mod venue;

pub use itinerary::{Exclusion, Itinerary, TimeOfDay, VenueRequest};
pub use region::{Region, RegionCatalog};
pub use venue::{GeoPoint, UnknownVenueType, Venue, VenueType};
