// ── API-to-domain type conversions ──
//
// Bridges raw `tportal_api` records into canonical domain types, and CDNs
// back into request records for create/update.

use tportal_api::{CacheGroupRecord, CdnRecord, DeliveryServiceRecord, ServerRecord};

use crate::model::{CacheGroup, Cdn, DeliveryService, EntityId, Server};

// ── CDN ──────────────────────────────────────────────────────────────

impl From<CdnRecord> for Cdn {
    fn from(r: CdnRecord) -> Self {
        Cdn {
            id: r.id.map(EntityId::from),
            name: r.name,
            domain_name: r.domain_name,
            dnssec_enabled: r.dnssec_enabled,
            last_updated: r.last_updated,
            extra: r.extra,
        }
    }
}

impl From<&Cdn> for CdnRecord {
    fn from(c: &Cdn) -> Self {
        CdnRecord {
            id: c.id.map(EntityId::get),
            name: c.name.clone(),
            domain_name: c.domain_name.clone(),
            dnssec_enabled: c.dnssec_enabled,
            last_updated: c.last_updated.clone(),
            extra: c.extra.clone(),
        }
    }
}

// ── Cache group ──────────────────────────────────────────────────────

impl From<CacheGroupRecord> for CacheGroup {
    fn from(r: CacheGroupRecord) -> Self {
        CacheGroup {
            id: EntityId::new(r.id),
            name: r.name,
            short_name: r.short_name,
            type_name: r.type_name,
            extra: r.extra,
        }
    }
}

// ── Server ───────────────────────────────────────────────────────────

impl From<ServerRecord> for Server {
    fn from(r: ServerRecord) -> Self {
        Server {
            id: EntityId::new(r.id),
            host_name: r.host_name,
            domain_name: r.domain_name,
            ip_address: r.ip_address,
            ip6_address: r.ip6_address,
            status: r.status,
            offline_reason: r.offline_reason,
            server_type: r.server_type,
            profile: r.profile,
            cdn_name: r.cdn_name,
            cache_group: r.cachegroup,
            phys_location: r.phys_location,
            update_pending: r.upd_pending,
            extra: r.extra,
        }
    }
}

// ── Delivery service ─────────────────────────────────────────────────

impl From<DeliveryServiceRecord> for DeliveryService {
    fn from(r: DeliveryServiceRecord) -> Self {
        DeliveryService {
            id: EntityId::new(r.id),
            xml_id: r.xml_id,
            display_name: r.display_name,
            protocol_code: r.protocol,
            qstring_code: r.qstring_ignore,
            cdn_name: r.cdn_name,
            active: r.active,
            extra: r.extra,
        }
    }
}
