use std::net::SocketAddr;
use std::sync::Arc;

use assetlens_core::store::CatalogStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assetlens_api::config::ServerConfig;
use assetlens_api::ingest::reload_catalog;
use assetlens_api::router::build_app_router;
use assetlens_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "assetlens_api=debug,assetlens_core=info,assetlens_sources=info,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        assets_dir = %config.assets_dir.display(),
        "Loaded server configuration",
    );

    // --- Alias registry ---
    let registry = config
        .load_alias_registry()
        .unwrap_or_else(|e| panic!("Invalid alias registry: {e}"));
    tracing::info!(
        default_format = registry.default_format(),
        formats = ?registry.formats().collect::<Vec<_>>(),
        "Alias registry loaded",
    );

    // --- App state ---
    let state = AppState {
        store: Arc::new(CatalogStore::new()),
        registry: Arc::new(registry),
        config: Arc::new(config.clone()),
    };

    // --- Initial catalog ---
    match reload_catalog(&state).await {
        Ok(report) => tracing::info!(
            assets = report.total_admitted,
            dropped = report.total_dropped,
            unavailable = report.unavailable.len(),
            "Initial catalog ready",
        ),
        Err(e) => tracing::error!(error = %e, "Initial catalog build failed"),
    }

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
