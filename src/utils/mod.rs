//! Small helpers shared across layers.
//!
//! - [`db_error`] - Classification of `sqlx` errors
//! - [`geo`] - Coordinate validation helpers

pub mod db_error;
pub mod geo;
