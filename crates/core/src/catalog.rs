//! The asset catalog: an ordered, immutable sequence of normalized assets.
//!
//! Order is the concatenation of per-source record order, with sources
//! taken in the order the caller supplies them. That order is what makes
//! "first match" reproducible, so the catalog is an append-only vector
//! built once per ingestion and never mutated afterwards.

use serde::Serialize;
use serde_json::Value;

use crate::aliases::AliasTable;
use crate::error::CoreError;
use crate::matching::{find_first_match, AssetMatch};
use crate::normalizer::normalize;
use crate::types::Asset;

// ---------------------------------------------------------------------------
// Ingestion input / report
// ---------------------------------------------------------------------------

/// Raw records of one source, with the alias table that reads them.
#[derive(Debug, Clone)]
pub struct SourceRecords {
    pub source_id: String,
    pub records: Vec<Value>,
    pub table: AliasTable,
}

/// A source whose records could not be obtained. It contributes no assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnavailableSource {
    pub source_id: String,
    pub reason: String,
}

/// Per-source ingestion counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub source_id: String,
    pub admitted: usize,
    pub dropped: usize,
}

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub sources: Vec<SourceSummary>,
    pub unavailable: Vec<UnavailableSource>,
    pub total_admitted: usize,
    pub total_dropped: usize,
}

impl IngestReport {
    /// Record a source that failed to load. Ingestion of other sources is
    /// unaffected.
    pub fn record_unavailable(&mut self, source_id: impl Into<String>, reason: impl Into<String>) {
        let source = UnavailableSource {
            source_id: source_id.into(),
            reason: reason.into(),
        };
        tracing::warn!(
            source_id = %source.source_id,
            reason = %source.reason,
            "Source unavailable, skipping",
        );
        self.unavailable.push(source);
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One page of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: &'a [Asset],
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    assets: Vec<Asset>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an already-normalized, already-ordered asset list.
    pub fn from_assets(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// Build a catalog by normalizing every record of every source, in the
    /// given order. Incomplete records are dropped and counted.
    pub fn ingest<I>(sources: I) -> (Self, IngestReport)
    where
        I: IntoIterator<Item = SourceRecords>,
    {
        let mut assets = Vec::new();
        let mut report = IngestReport::default();

        for source in sources {
            let mut admitted = 0;
            let mut dropped = 0;

            for (position, record) in source.records.iter().enumerate() {
                match normalize(record, &source.table) {
                    Ok(asset) => {
                        assets.push(asset);
                        admitted += 1;
                    }
                    Err(incomplete) => {
                        tracing::debug!(
                            source_id = %source.source_id,
                            position,
                            missing = ?incomplete.missing,
                            "Record skipped due to missing fields",
                        );
                        dropped += 1;
                    }
                }
            }

            tracing::info!(
                source_id = %source.source_id,
                admitted,
                dropped,
                "Source ingested",
            );

            report.total_admitted += admitted;
            report.total_dropped += dropped;
            report.sources.push(SourceSummary {
                source_id: source.source_id,
                admitted,
                dropped,
            });
        }

        tracing::info!(
            sources = report.sources.len(),
            assets = report.total_admitted,
            dropped = report.total_dropped,
            "Catalog built",
        );

        (Self { assets }, report)
    }

    /// Return the 1-based page `page` of `per_page` assets.
    ///
    /// A page past the end is empty but still reports the full total.
    pub fn page(&self, page: i64, per_page: i64) -> Result<Page<'_>, CoreError> {
        if page <= 0 {
            return Err(CoreError::InvalidArgument(format!(
                "page must be a positive integer, got {page}"
            )));
        }
        if per_page <= 0 {
            return Err(CoreError::InvalidArgument(format!(
                "per_page must be a positive integer, got {per_page}"
            )));
        }

        let total = self.assets.len();
        let start = usize::try_from(page - 1)
            .ok()
            .zip(usize::try_from(per_page).ok())
            .and_then(|(index, size)| index.checked_mul(size))
            .unwrap_or(usize::MAX)
            .min(total);
        let end = start
            .saturating_add(usize::try_from(per_page).unwrap_or(usize::MAX))
            .min(total);

        Ok(Page {
            items: &self.assets[start..end],
            total,
        })
    }

    /// First asset, in catalog order, with a field equal to `query`.
    pub fn find_match(&self, query: &str) -> Option<AssetMatch<'_>> {
        find_first_match(&self.assets, query)
    }

    /// Every asset, in catalog order.
    pub fn all(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
