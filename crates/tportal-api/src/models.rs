// Traffic Ops response types
//
// Every endpoint wraps its payload in `{ "response": ..., "alerts": [...] }`.
// Records model the fields the portal reads or writes; everything else
// lands in `extra` so a fetch-then-update round trip loses nothing.

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard Traffic Ops response envelope.
///
/// ```json
/// { "alerts": [{ "level": "success", "text": "cdn was created." }], "response": {...} }
/// ```
///
/// Reads carry only `response`, deletes carry only `alerts`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default = "Option::default")]
    pub response: Option<T>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// A single alert attached to a Traffic Ops response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Error,
}

// ── CDN ──────────────────────────────────────────────────────────────

/// A CDN as returned by `/cdns`.
///
/// `id` is absent when the record is a create request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub domain_name: String,
    #[serde(default)]
    pub dnssec_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Catch-all for fields the portal does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Cache group ──────────────────────────────────────────────────────

/// A cache group as returned by `/cachegroups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroupRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Server ───────────────────────────────────────────────────────────

/// A server as returned by `/servers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    pub id: i64,
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub domain_name: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub ip6_address: Option<String>,
    /// `ONLINE`, `REPORTED`, `OFFLINE`, `ADMIN_DOWN`, `PRE_PROD`, ...
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub offline_reason: Option<String>,
    #[serde(default, rename = "type")]
    pub server_type: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub cdn_name: Option<String>,
    #[serde(default)]
    pub cachegroup: Option<String>,
    #[serde(default)]
    pub phys_location: Option<String>,
    #[serde(default)]
    pub upd_pending: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Delivery service ─────────────────────────────────────────────────

/// A delivery service as returned by `/deliveryservices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryServiceRecord {
    pub id: i64,
    pub xml_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// 0=HTTP, 1=HTTPS, 2=HTTP AND HTTPS, 3=HTTP TO HTTPS
    #[serde(default)]
    pub protocol: Option<i64>,
    /// 0=USE, 1=IGNORE, 2=DROP
    #[serde(default)]
    pub qstring_ignore: Option<i64>,
    #[serde(default)]
    pub cdn_name: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Queue updates ────────────────────────────────────────────────────

/// Response payload of the `queue_update` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueUpdateResponse {
    pub action: String,
    #[serde(default)]
    pub cdn_id: Option<i64>,
    #[serde(default)]
    pub cachegroup_id: Option<i64>,
}
