// ── Backend service contracts ──
//
// Controllers only ever talk to the backend through these traits. `Portal`
// implements both over HTTP; tests substitute recording fakes.

use std::future::Future;

use crate::error::CoreError;
use crate::model::{Cdn, EntityId};

/// CDN persistence and CDN-wide server update commands.
pub trait CdnService {
    /// All CDNs, fetched fresh.
    fn get_cdns(&self) -> impl Future<Output = Result<Vec<Cdn>, CoreError>> + Send;

    /// Store a new CDN, returning the stored record.
    fn create_cdn(&self, cdn: &Cdn) -> impl Future<Output = Result<Cdn, CoreError>> + Send;

    /// Replace an existing CDN, returning the stored record.
    fn update_cdn(&self, cdn: &Cdn) -> impl Future<Output = Result<Cdn, CoreError>> + Send;

    fn delete_cdn(&self, id: EntityId) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Queue updates on every server of the CDN.
    fn queue_server_updates(
        &self,
        cdn_id: EntityId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Clear queued updates on every server of the CDN.
    fn clear_server_updates(
        &self,
        cdn_id: EntityId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Server update commands scoped to one cache group within a CDN.
pub trait CacheGroupService {
    fn queue_server_updates(
        &self,
        cache_group_id: EntityId,
        cdn_id: EntityId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_server_updates(
        &self,
        cache_group_id: EntityId,
        cdn_id: EntityId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
