//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`VenueRepository`] - Nearest-neighbour and browsing queries over venues
//!
//! # Testing
//!
//! See `tests/repository_venue.rs` for database-backed usage examples.

pub mod venue_repository;

pub use venue_repository::{VenueFilter, VenueRepository};

#[cfg(test)]
pub use venue_repository::MockVenueRepository;
