// ── Portal properties ──
//
// The read-only configuration tree consulted by the views. A closed set:
// unknown keys are rejected at load time so a typo never silently turns
// a feature off.

use serde::{Deserialize, Serialize};

/// Portal-wide view configuration, passed explicitly to controllers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Properties {
    pub servers: ServerProperties,
    pub delivery_services: DeliveryServiceProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerProperties {
    pub charts: ServerCharts,
}

/// `servers.charts.*`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerCharts {
    /// Show the per-server chart button in server tables.
    pub show: bool,
    /// Prefix for server chart links; the host name is appended.
    pub base_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeliveryServiceProperties {
    pub charts: DeliveryServiceCharts,
}

/// `delivery_services.charts.*`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeliveryServiceCharts {
    /// Prefix for delivery-service chart links; the xmlId is appended.
    pub base_url: String,
}
