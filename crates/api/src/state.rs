use std::sync::Arc;

use assetlens_core::aliases::AliasRegistry;
use assetlens_core::store::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Published catalog snapshot and its lifecycle.
    pub store: Arc<CatalogStore>,
    /// Alias registry loaded once at startup.
    pub registry: Arc<AliasRegistry>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
