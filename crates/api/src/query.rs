//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-number pagination parameters (`?page=&per_page=`).
///
/// Both are optional; the handler fills in defaults from configuration.
/// Non-positive values are rejected by the catalog, not clamped.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageParams {
    /// Resolve to `(page, per_page)`, defaulting missing values and capping
    /// `per_page` at `max_per_page`.
    pub fn resolve(&self, default_per_page: i64, max_per_page: i64) -> (i64, i64) {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(default_per_page).min(max_per_page);
        (page, per_page)
    }
}
