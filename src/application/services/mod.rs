//! Business logic services for the application layer.

pub mod planner_service;
pub mod venue_service;

pub use planner_service::{PlannerService, TripPlan};
pub use venue_service::VenueService;
