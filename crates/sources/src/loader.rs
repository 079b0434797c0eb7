use std::path::{Path, PathBuf};

use assetlens_core::aliases::AliasRegistry;
use assetlens_core::catalog::{Catalog, IngestReport, SourceRecords, UnavailableSource};
use serde_json::Value;

use crate::error::SourceError;

/// File extension recognised as a source document.
pub const SOURCE_EXTENSION: &str = "json";

/// Top-level key holding the record array in object-shaped documents.
pub const ASSETS_KEY: &str = "assets";

/// Sources read from a directory, in load order.
#[derive(Debug, Default)]
pub struct LoadedSources {
    pub sources: Vec<SourceRecords>,
    pub unavailable: Vec<UnavailableSource>,
}

/// List the source documents in `dir`, sorted by file name.
///
/// Only regular files with a `.json` extension directly inside `dir` are
/// returned; subdirectories are not searched. An entry that cannot be read
/// is skipped without affecting the rest of the listing.
pub fn list_source_files(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let entries = std::fs::read_dir(dir).map_err(|source| SourceError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    })?;

    let files = select_source_files(dir, entries.map(|entry| entry.map(|e| e.path())));
    tracing::info!(dir = %dir.display(), count = files.len(), "Found source files");
    Ok(files)
}

fn select_source_files<I>(dir: &Path, entries: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = std::io::Result<PathBuf>>,
{
    let mut files: Vec<PathBuf> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(
                    dir = %dir.display(),
                    error = %e,
                    "Skipping unreadable directory entry",
                );
                None
            }
        })
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
                && path.is_file()
        })
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    files
}

/// Read the raw records of one source document.
///
/// The document is either a JSON array of records or an object whose
/// `assets` key holds that array.
pub fn read_source(path: &Path) -> Result<Vec<Value>, SourceError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove(ASSETS_KEY) {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(SourceError::UnexpectedShape {
                path: path.to_path_buf(),
            }),
        },
        _ => Err(SourceError::UnexpectedShape {
            path: path.to_path_buf(),
        }),
    }
}

/// Source id of a document: its file stem (`routers.json` -> `routers`).
pub fn source_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read every source document in `dir`, pairing each with the alias table
/// the registry assigns to its source id.
///
/// Unreadable files are returned in [`LoadedSources::unavailable`] rather
/// than logged; [`IngestReport::record_unavailable`] logs them once.
pub fn load_directory(dir: &Path, registry: &AliasRegistry) -> Result<LoadedSources, SourceError> {
    let mut loaded = LoadedSources::default();

    for path in list_source_files(dir)? {
        let id = source_id(&path);
        match read_source(&path) {
            Ok(records) => {
                tracing::debug!(
                    source_id = %id,
                    format = registry.format_for(&id),
                    records = records.len(),
                    "Read source file",
                );
                loaded.sources.push(SourceRecords {
                    table: registry.table_for(&id).clone(),
                    source_id: id,
                    records,
                });
            }
            Err(e) => {
                loaded.unavailable.push(UnavailableSource {
                    source_id: id,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(loaded)
}

/// Load `dir` and build a catalog from it.
///
/// Never fails: an unreadable directory yields an empty catalog with the
/// directory reported as unavailable, and unreadable files are reported
/// individually.
pub fn ingest_directory(dir: &Path, registry: &AliasRegistry) -> (Catalog, IngestReport) {
    let loaded = match load_directory(dir, registry) {
        Ok(loaded) => loaded,
        Err(e) => LoadedSources {
            sources: Vec::new(),
            unavailable: vec![UnavailableSource {
                source_id: dir.display().to_string(),
                reason: e.to_string(),
            }],
        },
    };

    let (catalog, mut report) = Catalog::ingest(loaded.sources);
    for source in loaded.unavailable {
        report.record_unavailable(source.source_id, source.reason);
    }
    (catalog, report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
