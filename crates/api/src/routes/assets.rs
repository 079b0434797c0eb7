//! Route definitions for asset listing and lookup.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes, mounted under `/api/v1`.
///
/// ```text
/// GET    /assets         -> list_assets
/// POST   /assets/reload  -> reload_assets
/// POST   /match          -> match_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets", get(assets::list_assets))
        .route("/assets/reload", post(assets::reload_assets))
        .route("/match", post(assets::match_asset))
}
