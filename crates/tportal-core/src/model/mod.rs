// ── Domain model ──
//
// Canonical types handed to controllers and front ends. Only the fields
// the portal reads or writes are typed; the rest rides in `extra` so the
// backend stays the source of truth for the full record.

pub mod cache_group;
pub mod cdn;
pub mod delivery_service;
pub mod entity_id;
pub mod server;

pub use cache_group::CacheGroup;
pub use cdn::Cdn;
pub use delivery_service::DeliveryService;
pub use entity_id::EntityId;
pub use server::Server;
