//! DTOs for the region listing endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegionListResponse {
    pub total: usize,
    pub items: Vec<RegionItem>,
}

#[derive(Debug, Serialize)]
pub struct RegionItem {
    pub name: String,
}
