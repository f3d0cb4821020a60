use std::fmt;

use serde::Serialize;

use super::EntityId;

/// A CDN configuration entity.
///
/// `id` is `None` until the backend has stored the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cdn {
    pub id: Option<EntityId>,
    pub name: String,
    pub domain_name: String,
    pub dnssec_enabled: bool,
    pub last_updated: Option<String>,
    /// Backend fields round-tripped untouched on update.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Cdn {
    /// A fresh, unsaved CDN.
    pub fn new(name: impl Into<String>, domain_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain_name: domain_name.into(),
            ..Self::default()
        }
    }
}

/// Selection dialogs list CDNs by name.
impl fmt::Display for Cdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
