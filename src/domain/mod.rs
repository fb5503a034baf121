//! Domain layer containing business entities and logic.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by the
//! infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Venues, itineraries and regions
//! - [`parser`] - Natural-language trip request parser
//! - [`repositories`] - Data access trait definitions
//!
//! # Planning Flow
//!
//! 1. HTTP handler validates the request body
//! 2. [`parser::ItineraryParser`] turns the text into an [`entities::Itinerary`]
//! 3. [`crate::application::services::PlannerService`] resolves each surviving
//!    request through [`repositories::VenueRepository::find_nearest`]

pub mod entities;
pub mod parser;
pub mod repositories;
