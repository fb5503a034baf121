//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{PlannerService, VenueService};
use crate::domain::entities::RegionCatalog;
use crate::domain::parser::ItineraryParser;
use crate::domain::repositories::VenueRepository;

/// Application state. Everything in it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub planner_service: Arc<PlannerService<dyn VenueRepository>>,
    pub venue_service: Arc<VenueService<dyn VenueRepository>>,
    pub regions: Arc<RegionCatalog>,
}

impl AppState {
    /// Wires services around one repository and the region catalog.
    pub fn new(repository: Arc<dyn VenueRepository>, regions: Arc<RegionCatalog>) -> Self {
        let parser = Arc::new(ItineraryParser::new(regions.clone()));

        Self {
            planner_service: Arc::new(PlannerService::new(parser, repository.clone())),
            venue_service: Arc::new(VenueService::new(repository)),
            regions,
        }
    }
}
