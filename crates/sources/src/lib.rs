//! Filesystem loading of asset source documents.
//!
//! Each `*.json` file in the assets directory is one source. Its file stem
//! is the source id used to pick an alias table from the registry. Files
//! are read in lexicographic order so the resulting catalog order is
//! reproducible. A file that cannot be read or has an unexpected shape is
//! reported as unavailable and never stops the other files from loading.

pub mod error;
pub mod loader;

pub use error::SourceError;
pub use loader::{
    ingest_directory, list_source_files, load_directory, read_source, source_id, LoadedSources,
};
