//! Integration tests for GET /listings.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{accord_listing, accord_score_request, bare_listing, TestApp, ACCORD_VIN};

#[tokio::test]
async fn empty_store_lists_nothing() {
    let app = TestApp::new();

    let (status, body) = app.get("/listings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn listings_reflect_latest_score() {
    let app = TestApp::new();
    app.post("/ingest", json!([accord_listing()])).await;

    let (_, scored) = app.post("/score", json!([accord_score_request()])).await;
    let (status, body) = app.get("/listings").await;

    assert_eq!(status, StatusCode::OK);
    let row = &body[0];
    assert_eq!(row["vin"], ACCORD_VIN);
    assert_eq!(row["make"], "Honda");
    assert_eq!(row["model"], "Accord");
    assert_eq!(row["score"], scored[0]["score"]);
    assert_eq!(row["buyMax"], scored[0]["buyMax"]);
    assert_eq!(row["reasonCodes"], scored[0]["reasonCodes"]);
}

#[tokio::test]
async fn rescoring_replaces_current_score() {
    let app = TestApp::new();
    app.post("/ingest", json!([accord_listing()])).await;
    app.post("/score", json!([accord_score_request()])).await;

    let rescore = json!({ "vin": ACCORD_VIN, "price": 30000, "miles": 90000, "dom": 70 });
    let (_, second) = app.post("/score", json!([rescore])).await;
    let (_, body) = app.get("/listings").await;

    assert_eq!(app.store.score_count(), 2);
    assert_eq!(body[0]["score"], second[0]["score"]);
    assert_eq!(body[0]["reasonCodes"], json!(["AgedInventory"]));
}

#[tokio::test]
async fn newest_listing_comes_first() {
    let app = TestApp::new();
    app.post("/ingest", json!([bare_listing("OLDER0001", 5000.0)])).await;
    app.post("/ingest", json!([bare_listing("NEWER0001", 6000.0)])).await;

    let (_, body) = app.get("/listings").await;

    let vins: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["vin"].as_str().unwrap())
        .collect();
    assert_eq!(vins, vec!["NEWER0001", "OLDER0001"]);
}

#[tokio::test]
async fn unscored_listing_has_null_score() {
    let app = TestApp::new();
    app.post("/ingest", json!([bare_listing("UNSCORED1", 7000.0)])).await;

    let (_, body) = app.get("/listings").await;

    assert!(body[0]["score"].is_null());
    assert!(body[0]["buyMax"].is_null());
    assert_eq!(body[0]["reasonCodes"], json!([]));
}
