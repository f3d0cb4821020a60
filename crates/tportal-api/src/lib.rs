// tportal-api: Async Rust client for the Traffic Ops REST API

pub mod auth;
pub mod cache_groups;
pub mod cdns;
pub mod client;
pub mod delivery_services;
pub mod error;
pub mod models;
pub mod servers;
pub mod transport;

pub use cdns::QueueAction;
pub use client::TrafficOpsClient;
pub use error::Error;
pub use models::{
    Alert, AlertLevel, CacheGroupRecord, CdnRecord, DeliveryServiceRecord, QueueUpdateResponse,
    ServerRecord,
};
pub use transport::{TlsMode, TransportConfig};
