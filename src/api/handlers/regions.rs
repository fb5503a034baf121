//! Handler for the region listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::region::{RegionItem, RegionListResponse};
use crate::state::AppState;

/// Lists the known regions in reference order.
///
/// # Endpoint
///
/// `GET /api/regions`
pub async fn region_list_handler(State(state): State<AppState>) -> Json<RegionListResponse> {
    let items: Vec<RegionItem> = state
        .regions
        .regions()
        .iter()
        .map(|r| RegionItem {
            name: r.name.clone(),
        })
        .collect();

    Json(RegionListResponse {
        total: items.len(),
        items,
    })
}
