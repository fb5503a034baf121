//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod plan;
pub mod regions;
pub mod venues;

pub use health::health_handler;
pub use plan::plan_handler;
pub use regions::region_list_handler;
pub use venues::{venue_detail_handler, venue_list_handler, venue_nearby_handler};
