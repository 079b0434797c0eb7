//! Asset normalization: one raw record plus its source's alias table in,
//! one canonical [`Asset`] or an [`Incomplete`] marker out.

use serde_json::Value;

use crate::aliases::AliasTable;
use crate::resolver::resolve;
use crate::types::{Asset, CanonicalField};

/// A record that could not be normalized because one or more canonical
/// fields had no usable value.
///
/// This is an expected outcome, not a failure: ingestion drops the record
/// and counts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incomplete {
    /// Canonical fields with no usable value, in priority order.
    pub missing: Vec<CanonicalField>,
}

/// Normalize one raw record.
///
/// Resolved values are coerced to strings (numbers and booleans use their
/// JSON text) and trimmed. The record yields an [`Asset`] only when all
/// three fields end up non-empty. A record that is not a JSON object is
/// missing every field.
pub fn normalize(record: &Value, table: &AliasTable) -> Result<Asset, Incomplete> {
    let Value::Object(map) = record else {
        return Err(Incomplete {
            missing: CanonicalField::ALL.to_vec(),
        });
    };

    let resolved = resolve(map, table);
    let [name, model, ip_address] =
        CanonicalField::ALL.map(|field| resolved.get(field).and_then(coerce));

    match (name, model, ip_address) {
        (Some(name), Some(model), Some(ip_address)) => Ok(Asset {
            name,
            model,
            ip_address,
        }),
        (name, model, ip_address) => {
            let missing = CanonicalField::ALL
                .into_iter()
                .zip([name.is_none(), model.is_none(), ip_address.is_none()])
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
            Err(Incomplete { missing })
        }
    }
}

/// Coerce a raw JSON value to its trimmed string form.
///
/// Arrays and objects have no scalar form and yield `None`, as does any
/// value that is empty once trimmed.
pub fn coerce(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
