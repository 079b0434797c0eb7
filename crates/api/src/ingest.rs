//! Catalog (re)building from the configured assets directory.

use std::sync::Arc;

use assetlens_core::catalog::IngestReport;
use assetlens_sources::ingest_directory;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Re-read the assets directory and publish a fresh catalog snapshot.
///
/// Runs on the blocking pool; requests in flight keep reading the previous
/// snapshot until the swap.
pub async fn reload_catalog(state: &AppState) -> AppResult<IngestReport> {
    let store = Arc::clone(&state.store);
    let registry = Arc::clone(&state.registry);
    let dir = state.config.assets_dir.clone();

    tracing::info!(dir = %dir.display(), "Rebuilding asset catalog");

    tokio::task::spawn_blocking(move || store.rebuild(|| ingest_directory(&dir, &registry)))
        .await
        .map_err(|e| AppError::InternalError(format!("catalog rebuild task failed: {e}")))
}
