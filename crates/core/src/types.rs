use serde::{Deserialize, Serialize};

/// A normalized asset record.
///
/// Identity is structural: two assets are the same asset when all three
/// fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    pub model: String,
    pub ip_address: String,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        ip_address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            ip_address: ip_address.into(),
        }
    }

    /// Field values in match priority order: name, model, IP address.
    pub fn fields(&self) -> [(CanonicalField, &str); 3] {
        [
            (CanonicalField::Name, self.name.as_str()),
            (CanonicalField::Model, self.model.as_str()),
            (CanonicalField::IpAddress, self.ip_address.as_str()),
        ]
    }
}

/// One of the three attributes every source format is reconciled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    Name,
    Model,
    IpAddress,
}

impl CanonicalField {
    /// All canonical fields, in priority order.
    pub const ALL: [CanonicalField; 3] = [Self::Name, Self::Model, Self::IpAddress];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Model => "model",
            Self::IpAddress => "ipAddress",
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
