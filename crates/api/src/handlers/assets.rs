//! Handlers for asset listing, lookup and catalog reload.

use assetlens_core::catalog::IngestReport;
use assetlens_core::error::CoreError;
use assetlens_core::types::Asset;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::ingest::reload_catalog;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Message returned when a lookup finds nothing.
pub const NO_ASSET_FOUND: &str = "No Asset Found";

/// One page of the catalog with pagination metadata.
#[derive(Debug, Serialize)]
pub struct AssetPage {
    pub assets: Vec<Asset>,
    pub total: usize,
    pub page: i64,
    pub per_page: i64,
}

/// Body of a lookup request. A missing `search` is the empty query.
#[derive(Debug, Default, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub search: String,
}

/// GET /api/v1/assets
///
/// Paginated listing of the full catalog, in catalog order.
pub async fn list_assets(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let (page, per_page) =
        params.resolve(state.config.default_per_page, state.config.max_per_page);

    let catalog = state.store.snapshot()?;
    let slice = catalog.page(page, per_page)?;

    tracing::debug!(page, per_page, returned = slice.items.len(), "Listing assets");

    Ok(Json(DataResponse {
        data: AssetPage {
            assets: slice.items.to_vec(),
            total: slice.total,
            page,
            per_page,
        },
    }))
}

/// POST /api/v1/match
///
/// Return the first asset whose name, model or IP address equals the
/// query, ignoring case. No match is a 404 with "No Asset Found".
pub async fn match_asset(
    State(state): State<AppState>,
    body: Result<Json<MatchRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let catalog = state.store.snapshot()?;

    match catalog.find_match(&input.search) {
        Some(found) => {
            tracing::info!(
                query = %input.search,
                index = found.index,
                field = %found.field,
                "Asset matched",
            );
            Ok(Json(DataResponse {
                data: found.asset.clone(),
            }))
        }
        None => {
            tracing::info!(query = %input.search, "No asset matched");
            Err(CoreError::NotFound(NO_ASSET_FOUND.to_string()).into())
        }
    }
}

/// POST /api/v1/assets/reload
///
/// Re-read the assets directory and swap in the rebuilt catalog.
pub async fn reload_assets(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<IngestReport>>> {
    let report = reload_catalog(&state).await?;
    Ok(Json(DataResponse { data: report }))
}
