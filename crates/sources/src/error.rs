use std::path::PathBuf;

/// Failure to obtain the records of a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Assets directory unavailable: {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected data format in {path}: expected an array or an object with an 'assets' array")]
    UnexpectedShape { path: PathBuf },
}
