#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use assetlens_api::config::ServerConfig;
use assetlens_api::router::build_app_router;
use assetlens_api::state::AppState;
use assetlens_core::aliases::AliasRegistry;
use assetlens_core::catalog::{Catalog, SourceRecords};
use assetlens_core::store::CatalogStore;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and the production pagination defaults.
pub fn test_config(assets_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        assets_dir,
        alias_registry_path: None,
        default_per_page: 5,
        max_per_page: 100,
    }
}

/// Build state around `store`, reading sources from `assets_dir` on reload.
pub fn test_state(store: CatalogStore, assets_dir: PathBuf) -> AppState {
    AppState {
        store: Arc::new(store),
        registry: Arc::new(AliasRegistry::builtin()),
        config: Arc::new(test_config(assets_dir)),
    }
}

/// Build the full application router over an already-published catalog.
///
/// Uses the same [`build_app_router`] as `main.rs`, so integration tests
/// exercise the production middleware stack.
pub fn build_test_app(catalog: Catalog) -> Router {
    build_app_from_state(test_state(
        CatalogStore::with_catalog(catalog),
        PathBuf::from("assets"),
    ))
}

pub fn build_app_from_state(state: AppState) -> Router {
    let config = state.config.as_ref().clone();
    build_app_router(state, &config)
}

/// Catalog built from the two-format scenario plus a few extra assets.
///
/// Order: Router1 (format A), Router1 (format B), Switch2, Firewall3.
pub fn sample_catalog() -> Catalog {
    let table = |id: &str| AliasRegistry::builtin().table_for(id).clone();
    let (catalog, _) = Catalog::ingest([
        SourceRecords {
            source_id: "format_a".to_string(),
            records: vec![
                json!({"name": "Router1", "model": "X100", "ip_address": "10.0.0.1"}),
                json!({"name_snmp": "Switch9"}),
            ],
            table: table("format_a"),
        },
        SourceRecords {
            source_id: "format_b".to_string(),
            records: vec![
                json!({"asset-name": "Router1", "asset-model": "X100", "ip-address": "10.0.0.1"}),
                json!({"asset-name": "Switch2", "asset-model": "S200", "ip-address": "10.0.0.2"}),
                json!({"asset-name": "Firewall3", "asset-model": "F300", "ip-address": "10.0.0.3"}),
            ],
            table: table("format_b"),
        },
    ]);
    catalog
}

/// Send a GET request and return the response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with no body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
