//! Stateless display helpers shared across views.

mod delivery_service;
mod server;

pub use delivery_service::{DeliveryServiceUtils, Protocol, QueryStringHandling, protocols, qstrings};
pub use server::{ServerUtils, is_offline, monitor_url, offline_reason};
