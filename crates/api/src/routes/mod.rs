pub mod assets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                  paginated listing (GET)
/// /assets/reload           rebuild catalog from the assets directory (POST)
/// /match                   first-match lookup (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(assets::router())
}
