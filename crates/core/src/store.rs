//! Publication of the current catalog snapshot.
//!
//! Readers clone an `Arc<Catalog>` and then work on an immutable structure
//! with no lock held. A rebuild constructs a whole new catalog off the read
//! path and publishes it with a single reference swap, so a reader sees
//! either the previous snapshot or the new one, never a partial build.
//!
//! Lifecycle: `Empty -> Building -> Ready`, and `Ready -> Building -> Ready`
//! on every reload. During a reload the previous snapshot stays readable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde::Serialize;

use crate::catalog::{Catalog, IngestReport};
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogState {
    Empty,
    Building,
    Ready,
}

impl CatalogState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Building => "building",
            Self::Ready => "ready",
        }
    }
}

impl std::fmt::Display for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state plus the size of the currently readable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    pub state: CatalogState,
    pub assets: usize,
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    /// Current snapshot; `None` until the first publish.
    current: RwLock<Option<Arc<Catalog>>>,
    /// Set while a rebuild is in progress.
    building: AtomicBool,
    /// Serializes writers.
    writer: Mutex<()>,
}

/// Clears the building flag when a rebuild ends, including by unwinding.
struct BuildingGuard<'a>(&'a AtomicBool);

impl Drop for BuildingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that is already `Ready` with `catalog`.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let store = Self::new();
        store.publish(catalog);
        store
    }

    /// The current snapshot. Cheap: clones one `Arc`.
    pub fn snapshot(&self) -> Result<Arc<Catalog>, CoreError> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(CoreError::NotReady)
    }

    /// Replace the current snapshot with `catalog`.
    pub fn publish(&self, catalog: Catalog) {
        let next = Arc::new(catalog);
        let assets = next.len();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(next);
        tracing::info!(assets, "Catalog snapshot published");
    }

    /// Build a new catalog with `build` and publish it.
    ///
    /// Concurrent rebuilds run one at a time. Readers keep the previous
    /// snapshot until the swap.
    pub fn rebuild<F>(&self, build: F) -> IngestReport
    where
        F: FnOnce() -> (Catalog, IngestReport),
    {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.building.store(true, Ordering::Release);
        let _guard = BuildingGuard(&self.building);

        let (catalog, report) = build();
        self.publish(catalog);
        report
    }

    pub fn state(&self) -> CatalogState {
        if self.building.load(Ordering::Acquire) {
            CatalogState::Building
        } else if self.snapshot().is_ok() {
            CatalogState::Ready
        } else {
            CatalogState::Empty
        }
    }

    pub fn status(&self) -> StoreStatus {
        StoreStatus {
            state: self.state(),
            assets: self.snapshot().map(|c| c.len()).unwrap_or(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
