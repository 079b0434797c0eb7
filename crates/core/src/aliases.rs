//! Declarative alias registry.
//!
//! Every known source format is described by an [`AliasTable`]: for each
//! canonical field, the raw keys that format uses for it, in priority order.
//! The [`AliasRegistry`] maps source identifiers to formats so that adding a
//! new source format is a registry change rather than a code change.
//!
//! A registry document looks like:
//!
//! ```json
//! {
//!   "default_format": "legacy",
//!   "formats": {
//!     "snake": { "name": ["name"], "model": ["model"], "ip_address": ["ip_address"] }
//!   },
//!   "sources": { "routers": "snake" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::CanonicalField;

// ---------------------------------------------------------------------------
// Built-in formats
// ---------------------------------------------------------------------------

/// Format with snake_case keys (`name`, `model`, `ip_address`).
pub const FORMAT_SNAKE: &str = "snake";

/// Format with kebab-case, prefixed keys (`asset-name`, `asset-model`, `ip-address`).
pub const FORMAT_KEBAB: &str = "kebab";

/// Catch-all format accepting every alias the legacy loader understood.
pub const FORMAT_LEGACY: &str = "legacy";

// ---------------------------------------------------------------------------
// AliasTable
// ---------------------------------------------------------------------------

/// Raw keys accepted for each canonical field in one source format.
///
/// Lists are ordered: when a record carries more than one alias for the
/// same field, the alias listed first wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTable {
    pub name: Vec<String>,
    pub model: Vec<String>,
    pub ip_address: Vec<String>,
}

impl AliasTable {
    pub fn new(name: &[&str], model: &[&str], ip_address: &[&str]) -> Self {
        let owned =
            |keys: &[&str]| -> Vec<String> { keys.iter().map(|k| (*k).to_string()).collect() };
        Self {
            name: owned(name),
            model: owned(model),
            ip_address: owned(ip_address),
        }
    }

    /// Accepted raw keys for `field`, in priority order.
    pub fn aliases(&self, field: CanonicalField) -> &[String] {
        match field {
            CanonicalField::Name => &self.name,
            CanonicalField::Model => &self.model,
            CanonicalField::IpAddress => &self.ip_address,
        }
    }

    fn validate(&self, format: &str) -> Result<(), CoreError> {
        for field in CanonicalField::ALL {
            if self.aliases(field).iter().all(|k| k.trim().is_empty()) {
                return Err(CoreError::Validation(format!(
                    "format '{format}' declares no alias for field '{field}'"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// AliasRegistry
// ---------------------------------------------------------------------------

/// On-disk shape of a registry document.
#[derive(Debug, Deserialize)]
struct RegistryDocument {
    default_format: String,
    formats: BTreeMap<String, AliasTable>,
    #[serde(default)]
    sources: BTreeMap<String, String>,
}

/// Mapping from source identifier to the [`AliasTable`] used to read it.
///
/// Construction validates the registry, so lookups never fail: a source
/// without an explicit mapping reads with the default format.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    default_format: String,
    default_table: AliasTable,
    formats: BTreeMap<String, AliasTable>,
    sources: BTreeMap<String, String>,
}

impl AliasRegistry {
    /// Build and validate a registry.
    pub fn new(
        default_format: impl Into<String>,
        formats: BTreeMap<String, AliasTable>,
        sources: BTreeMap<String, String>,
    ) -> Result<Self, CoreError> {
        let default_format = default_format.into();

        let default_table = formats.get(&default_format).cloned().ok_or_else(|| {
            CoreError::Validation(format!("default format '{default_format}' is not defined"))
        })?;
        for (name, table) in &formats {
            table.validate(name)?;
        }
        for (source, format) in &sources {
            if !formats.contains_key(format) {
                return Err(CoreError::Validation(format!(
                    "source '{source}' maps to unknown format '{format}'"
                )));
            }
        }

        Ok(Self {
            default_format,
            default_table,
            formats,
            sources,
        })
    }

    /// Parse and validate a registry from its JSON document form.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let doc: RegistryDocument = serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("malformed alias registry: {e}")))?;
        Self::new(doc.default_format, doc.formats, doc.sources)
    }

    /// The registry used when no registry document is configured.
    pub fn builtin() -> Self {
        let mut formats = BTreeMap::new();
        formats.insert(
            FORMAT_SNAKE.to_string(),
            AliasTable::new(&["name"], &["model"], &["ip_address"]),
        );
        formats.insert(
            FORMAT_KEBAB.to_string(),
            AliasTable::new(&["asset-name"], &["asset-model"], &["ip-address"]),
        );
        let legacy = AliasTable::new(
            &["name", "name_snmp", "asset-name"],
            &["model", "asset-model"],
            &["ip_address", "ipv4", "ip-address"],
        );
        formats.insert(FORMAT_LEGACY.to_string(), legacy.clone());

        Self {
            default_format: FORMAT_LEGACY.to_string(),
            default_table: legacy,
            formats,
            sources: BTreeMap::new(),
        }
    }

    /// Name of the format used to read `source_id`.
    pub fn format_for(&self, source_id: &str) -> &str {
        match self.sources.get(source_id) {
            Some(format) if self.formats.contains_key(format) => format,
            _ => &self.default_format,
        }
    }

    /// Alias table used to read `source_id`.
    pub fn table_for(&self, source_id: &str) -> &AliasTable {
        self.sources
            .get(source_id)
            .and_then(|format| self.formats.get(format))
            .unwrap_or(&self.default_table)
    }

    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    /// Defined format names, sorted.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
