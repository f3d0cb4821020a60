use serde::Serialize;

use super::EntityId;
use crate::utils::{Protocol, QueryStringHandling};

/// A delivery service, as far as the portal's display helpers need it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryService {
    pub id: EntityId,
    /// External identifier, used to build chart links.
    pub xml_id: String,
    pub display_name: Option<String>,
    /// Raw protocol code; see [`Self::protocol`].
    pub protocol_code: Option<i64>,
    /// Raw query-string handling code; see [`Self::query_string_handling`].
    pub qstring_code: Option<i64>,
    pub cdn_name: Option<String>,
    pub active: bool,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DeliveryService {
    pub fn new(id: impl Into<EntityId>, xml_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            xml_id: xml_id.into(),
            display_name: None,
            protocol_code: None,
            qstring_code: None,
            cdn_name: None,
            active: false,
            extra: serde_json::Map::new(),
        }
    }

    /// Decoded protocol, `None` when absent or out of range.
    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol_code.and_then(Protocol::from_code)
    }

    /// Decoded query-string handling, `None` when absent or out of range.
    pub fn query_string_handling(&self) -> Option<QueryStringHandling> {
        self.qstring_code.and_then(QueryStringHandling::from_code)
    }
}
