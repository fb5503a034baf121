//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgVenueRepository`] - Venue lookups backed by PostGIS

pub mod pg_venue_repository;

pub use pg_venue_repository::PgVenueRepository;
