use serde::Serialize;

use super::EntityId;

/// A cache or infrastructure server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Server {
    pub id: EntityId,
    pub host_name: String,
    pub domain_name: String,
    pub ip_address: Option<String>,
    pub ip6_address: Option<String>,
    /// Backend status name (`ONLINE`, `REPORTED`, `OFFLINE`, `ADMIN_DOWN`, ...).
    pub status: String,
    pub offline_reason: Option<String>,
    pub server_type: Option<String>,
    pub profile: Option<String>,
    pub cdn_name: Option<String>,
    pub cache_group: Option<String>,
    pub phys_location: Option<String>,
    pub update_pending: bool,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Server {
    /// Fully qualified host name (`host.domain`).
    pub fn fqdn(&self) -> String {
        if self.domain_name.is_empty() {
            self.host_name.clone()
        } else {
            format!("{}.{}", self.host_name, self.domain_name)
        }
    }
}

