use std::path::PathBuf;

use assetlens_core::aliases::AliasRegistry;
use assetlens_core::error::CoreError;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the `*.json` source documents (default: `./assets`).
    pub assets_dir: PathBuf,
    /// Optional alias registry document. The built-in registry is used when unset.
    pub alias_registry_path: Option<PathBuf>,
    /// Page size used when a listing request gives none (default: `5`).
    pub default_per_page: i64,
    /// Largest page size a listing request may ask for (default: `100`).
    pub max_per_page: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ASSETS_DIR`           | `./assets`                 |
    /// | `ALIAS_REGISTRY_PATH`  | unset                      |
    /// | `DEFAULT_PER_PAGE`     | `5`                        |
    /// | `MAX_PER_PAGE`         | `100`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets"));

        let alias_registry_path = std::env::var("ALIAS_REGISTRY_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let default_per_page: i64 = std::env::var("DEFAULT_PER_PAGE")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DEFAULT_PER_PAGE must be a valid i64");

        let max_per_page: i64 = std::env::var("MAX_PER_PAGE")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("MAX_PER_PAGE must be a valid i64");

        assert!(default_per_page > 0, "DEFAULT_PER_PAGE must be positive");
        assert!(
            max_per_page >= default_per_page,
            "MAX_PER_PAGE must be at least DEFAULT_PER_PAGE"
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            assets_dir,
            alias_registry_path,
            default_per_page,
            max_per_page,
        }
    }

    /// Load the alias registry named by `alias_registry_path`, or the
    /// built-in registry when none is configured.
    pub fn load_alias_registry(&self) -> Result<AliasRegistry, CoreError> {
        let Some(path) = &self.alias_registry_path else {
            return Ok(AliasRegistry::builtin());
        };

        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Validation(format!(
                "cannot read alias registry {}: {e}",
                path.display()
            ))
        })?;
        AliasRegistry::from_json_str(&raw)
    }
}
