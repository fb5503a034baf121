//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::planner_service::PlannerService`] - Trip request parsing and venue resolution
//! - [`services::venue_service::VenueService`] - Venue listing, lookup and radius search

pub mod services;
