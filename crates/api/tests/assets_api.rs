//! Integration tests for paginated asset listing.

mod common;

use std::path::PathBuf;

use assetlens_core::catalog::Catalog;
use assetlens_core::store::CatalogStore;
use assetlens_core::types::Asset;
use axum::http::StatusCode;
use common::{body_json, get};

fn numbered(count: usize) -> Catalog {
    Catalog::from_assets(
        (1..=count)
            .map(|i| Asset::new(format!("host-{i}"), "M1", format!("10.0.1.{i}")))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Test: defaults are page 1 with 5 per page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_uses_default_pagination() {
    let app = common::build_test_app(numbered(7));
    let response = get(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["page"], 1);
    assert_eq!(data["per_page"], 5);
    assert_eq!(data["total"], 7);
    assert_eq!(data["assets"].as_array().unwrap().len(), 5);
    assert_eq!(data["assets"][0]["name"], "host-1");
}

// ---------------------------------------------------------------------------
// Test: assets use the canonical field names
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_canonical_assets() {
    let app = common::build_test_app(common::sample_catalog());
    let response = get(app, "/api/v1/assets?page=1&per_page=2").await;

    let json = body_json(response).await;
    let expected = serde_json::json!({"name": "Router1", "model": "X100", "ipAddress": "10.0.0.1"});
    assert_eq!(json["data"]["assets"], serde_json::json!([expected, expected]));
    assert_eq!(json["data"]["total"], 4);
}

// ---------------------------------------------------------------------------
// Test: second page continues where the first ended
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_second_page() {
    let app = common::build_test_app(numbered(7));
    let response = get(app, "/api/v1/assets?page=2&per_page=5").await;

    let json = body_json(response).await;
    let assets = json["data"]["assets"].as_array().unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0]["name"], "host-6");
    assert_eq!(assets[1]["name"], "host-7");
}

// ---------------------------------------------------------------------------
// Test: a page past the end is empty, not an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_page_past_end_is_empty() {
    let app = common::build_test_app(numbered(3));
    let response = get(app, "/api/v1/assets?page=9&per_page=5").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["assets"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["total"], 3);
}

// ---------------------------------------------------------------------------
// Test: per_page is capped at the configured maximum
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_caps_per_page() {
    let app = common::build_test_app(numbered(150));
    let response = get(app, "/api/v1/assets?per_page=1000").await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["per_page"], 100);
    assert_eq!(json["data"]["assets"].as_array().unwrap().len(), 100);
}

// ---------------------------------------------------------------------------
// Test: non-positive pagination values are rejected with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_rejects_zero_page() {
    let app = common::build_test_app(numbered(3));
    let response = get(app, "/api/v1/assets?page=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn list_rejects_negative_per_page() {
    let app = common::build_test_app(numbered(3));
    let response = get(app, "/api/v1/assets?per_page=-2").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_ARGUMENT");
}

// ---------------------------------------------------------------------------
// Test: non-numeric pagination values are rejected with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_rejects_non_numeric_page() {
    let app = common::build_test_app(numbered(3));
    let response = get(app, "/api/v1/assets?page=invalid&per_page=5").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Test: listing before the first ingestion is 503
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_before_ingestion_is_not_ready() {
    let state = common::test_state(CatalogStore::new(), PathBuf::from("assets"));
    let app = common::build_app_from_state(state);
    let response = get(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "NOT_READY");
}

// ---------------------------------------------------------------------------
// Test: walking every page reconstructs the catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pages_cover_catalog_without_gaps() {
    let catalog = numbered(12);
    let mut names = Vec::new();

    for page in 1..=3 {
        let app = common::build_test_app(catalog.clone());
        let response = get(app, &format!("/api/v1/assets?page={page}&per_page=5")).await;
        let json = body_json(response).await;
        for asset in json["data"]["assets"].as_array().unwrap() {
            names.push(asset["name"].as_str().unwrap().to_string());
        }
    }

    let expected: Vec<String> = (1..=12).map(|i| format!("host-{i}")).collect();
    assert_eq!(names, expected);
}
