//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`reference_data`] - Static reference lists loaded at startup

pub mod persistence;
pub mod reference_data;
