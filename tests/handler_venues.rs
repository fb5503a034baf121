mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use trip_planner::api::handlers::{
    venue_detail_handler, venue_list_handler, venue_nearby_handler,
};
use trip_planner::state::AppState;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/venues/{type}", get(venue_list_handler))
        .route("/api/venues/{type}/nearby", get(venue_nearby_handler))
        .route("/api/venues/{type}/{id}", get(venue_detail_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

fn default_server() -> TestServer {
    let (state, _repo) = common::create_test_state();
    make_server(state)
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_venue_list_success() {
    let server = default_server();

    let response = server.get("/api/venues/lodging").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["total_items"], 2);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["page_size"], 25);
    assert_eq!(json["items"][0]["type"], "lodging");
}

#[tokio::test]
async fn test_venue_list_accepts_table_alias() {
    let server = default_server();

    let response = server.get("/api/venues/restaurants").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"][0]["type"], "dining");
}

#[tokio::test]
async fn test_venue_list_region_filter_is_case_insensitive() {
    let server = default_server();

    let response = server
        .get("/api/venues/attraction")
        .add_query_param("region", "ORAN")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Santa Cruz Fort");
    assert_eq!(json["pagination"]["total_items"], 1);
}

#[tokio::test]
async fn test_venue_list_pagination() {
    let server = default_server();

    let response = server
        .get("/api/venues/dining")
        .add_query_param("page", "2")
        .add_query_param("page_size", "1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["pagination"]["total_pages"], 2);
}

#[tokio::test]
async fn test_venue_list_invalid_page_size() {
    let server = default_server();

    let response = server
        .get("/api/venues/dining")
        .add_query_param("page_size", "0")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_venue_list_unknown_type() {
    let server = default_server();

    let response = server.get("/api/venues/spaceship").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

// ─── DETAIL ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_venue_detail_success() {
    let server = default_server();

    let response = server.get("/api/venues/dining/10").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 10);
    assert_eq!(json["name"], "Le Cintra");
    assert_eq!(json["region"], "Oran");
    assert!(json.get("lat").is_some());
    assert!(json.get("lon").is_some());
}

#[tokio::test]
async fn test_venue_detail_wrong_type_not_found() {
    let server = default_server();

    // ID 1 is a hotel, not a restaurant.
    let response = server.get("/api/venues/dining/1").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

// ─── NEARBY ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_venue_nearby_default_radius() {
    let server = default_server();

    let response = server
        .get("/api/venues/dining/nearby")
        .add_query_param("lat", common::ORAN.lat)
        .add_query_param("lon", common::ORAN.lon)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["radius_m"], 5000.0);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Le Cintra");
}

#[tokio::test]
async fn test_venue_nearby_orders_by_distance() {
    let server = default_server();

    let response = server
        .get("/api/venues/lodging/nearby")
        .add_query_param("lat", common::ALGER.lat)
        .add_query_param("lon", common::ALGER.lon)
        .add_query_param("radius", "50000")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Hotel El Djazair");
}

#[tokio::test]
async fn test_venue_nearby_invalid_radius() {
    let server = default_server();

    for radius in ["0", "-5", "50001"] {
        let response = server
            .get("/api/venues/dining/nearby")
            .add_query_param("lat", common::ORAN.lat)
            .add_query_param("lon", common::ORAN.lon)
            .add_query_param("radius", radius)
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_venue_nearby_invalid_coordinates() {
    let server = default_server();

    let response = server
        .get("/api/venues/dining/nearby")
        .add_query_param("lat", "95")
        .add_query_param("lon", "3")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_venue_nearby_missing_coordinates() {
    let server = default_server();

    let response = server.get("/api/venues/dining/nearby").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_venue_list_database_unavailable() {
    let (state, repo) = common::create_test_state();
    repo.set_unavailable(true);
    let server = make_server(state);

    let response = server.get("/api/venues/lodging").await;

    response.assert_status_service_unavailable();
}
