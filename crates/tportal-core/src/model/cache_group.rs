use serde::Serialize;

use super::EntityId;

/// A named grouping of cache servers. Read-only in the portal views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheGroup {
    pub id: EntityId,
    pub name: String,
    pub short_name: Option<String>,
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CacheGroup {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: None,
            type_name: None,
            extra: serde_json::Map::new(),
        }
    }
}
