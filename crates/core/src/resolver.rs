//! Field resolution: pick, per canonical field, the raw value a record
//! carries under one of the field's aliases.

use serde_json::{Map, Value};

use crate::aliases::AliasTable;
use crate::types::CanonicalField;

/// Raw values resolved for each canonical field. `None` means absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedFields<'a> {
    pub name: Option<&'a Value>,
    pub model: Option<&'a Value>,
    pub ip_address: Option<&'a Value>,
}

impl<'a> ResolvedFields<'a> {
    pub fn get(&self, field: CanonicalField) -> Option<&'a Value> {
        match field {
            CanonicalField::Name => self.name,
            CanonicalField::Model => self.model,
            CanonicalField::IpAddress => self.ip_address,
        }
    }

    fn set(&mut self, field: CanonicalField, value: Option<&'a Value>) {
        match field {
            CanonicalField::Name => self.name = value,
            CanonicalField::Model => self.model = value,
            CanonicalField::IpAddress => self.ip_address = value,
        }
    }
}

/// Resolve every canonical field of `record` through `table`.
///
/// Aliases are tried in the order the table lists them; the first one
/// holding a present value wins. Nulls, blank strings, arrays and objects
/// are not present and fall through to the next alias.
pub fn resolve<'a>(record: &'a Map<String, Value>, table: &AliasTable) -> ResolvedFields<'a> {
    let mut resolved = ResolvedFields::default();
    for field in CanonicalField::ALL {
        let value = table
            .aliases(field)
            .iter()
            .filter_map(|alias| record.get(alias))
            .find(|value| is_present(value));
        resolved.set(field, value);
    }
    resolved
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}
