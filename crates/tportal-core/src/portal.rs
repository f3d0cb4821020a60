// ── Portal: the HTTP-backed service implementation ──
//
// Owns the Traffic Ops client, performs the session login, and implements
// the controller-facing service traits. The read methods are what a front
// end's routing layer calls to resolve a view's data before constructing
// its controller.

use std::sync::Arc;

use tracing::{debug, info, warn};

use tportal_api::{QueueAction, TrafficOpsClient};

use crate::config::PortalConfig;
use crate::error::CoreError;
use crate::model::{CacheGroup, Cdn, DeliveryService, EntityId, Server};
use crate::service::{CacheGroupService, CdnService};

/// Connection to one Traffic Ops instance.
///
/// Cheaply cloneable; clones share the HTTP client and its session cookie.
#[derive(Debug, Clone)]
pub struct Portal {
    inner: Arc<PortalInner>,
}

#[derive(Debug)]
struct PortalInner {
    config: PortalConfig,
    client: TrafficOpsClient,
}

impl Portal {
    /// Build the HTTP client. Does NOT log in -- call [`connect()`](Self::connect).
    pub fn new(config: PortalConfig) -> Result<Self, CoreError> {
        let client = TrafficOpsClient::new(config.url.clone(), &config.transport())?
            .with_api_version(config.api_version.clone());
        Ok(Self::with_client(config, client))
    }

    /// Wrap an existing client (tests, custom transports).
    pub fn with_client(config: PortalConfig, client: TrafficOpsClient) -> Self {
        Self {
            inner: Arc::new(PortalInner { config, client }),
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    pub fn client(&self) -> &TrafficOpsClient {
        &self.inner.client
    }

    // ── Session lifecycle ────────────────────────────────────────

    /// Log in with the configured credentials.
    pub async fn connect(&self) -> Result<(), CoreError> {
        let creds = &self.inner.config.credentials;
        self.inner
            .client
            .login(&creds.username, &creds.password)
            .await?;
        info!(url = %self.inner.config.url, user = %creds.username, "connected to traffic ops");
        Ok(())
    }

    /// End the session. Failures are logged, not returned.
    pub async fn disconnect(&self) {
        if let Err(e) = self.inner.client.logout().await {
            warn!(error = %e, "logout failed (non-fatal)");
        }
        debug!("disconnected");
    }

    // ── View data ────────────────────────────────────────────────

    pub async fn get_cdn(&self, id: EntityId) -> Result<Cdn, CoreError> {
        self.inner
            .client
            .get_cdn(id.get())
            .await?
            .map(Cdn::from)
            .ok_or_else(|| CoreError::not_found("cdn", id))
    }

    pub async fn get_cache_group(&self, id: EntityId) -> Result<CacheGroup, CoreError> {
        self.inner
            .client
            .get_cache_group(id.get())
            .await?
            .map(CacheGroup::from)
            .ok_or_else(|| CoreError::not_found("cache group", id))
    }

    pub async fn get_servers(&self) -> Result<Vec<Server>, CoreError> {
        let records = self.inner.client.list_servers(None).await?;
        Ok(records.into_iter().map(Server::from).collect())
    }

    pub async fn get_cache_group_servers(&self, id: EntityId) -> Result<Vec<Server>, CoreError> {
        let records = self.inner.client.list_servers(Some(id.get())).await?;
        Ok(records.into_iter().map(Server::from).collect())
    }

    pub async fn get_delivery_services(&self) -> Result<Vec<DeliveryService>, CoreError> {
        let records = self.inner.client.list_delivery_services().await?;
        Ok(records.into_iter().map(DeliveryService::from).collect())
    }

    pub async fn get_delivery_service(&self, id: EntityId) -> Result<DeliveryService, CoreError> {
        self.inner
            .client
            .get_delivery_service(id.get())
            .await?
            .map(DeliveryService::from)
            .ok_or_else(|| CoreError::not_found("delivery service", id))
    }

    async fn queue_cdn(&self, cdn_id: EntityId, action: QueueAction) -> Result<(), CoreError> {
        self.inner
            .client
            .queue_cdn_updates(cdn_id.get(), action)
            .await?;
        info!(%cdn_id, action = action.as_str(), "server updates changed for cdn");
        Ok(())
    }

    async fn queue_cache_group(
        &self,
        cache_group_id: EntityId,
        cdn_id: EntityId,
        action: QueueAction,
    ) -> Result<(), CoreError> {
        self.inner
            .client
            .queue_cache_group_updates(cache_group_id.get(), cdn_id.get(), action)
            .await?;
        info!(
            %cache_group_id,
            %cdn_id,
            action = action.as_str(),
            "server updates changed for cache group"
        );
        Ok(())
    }
}

impl CdnService for Portal {
    async fn get_cdns(&self) -> Result<Vec<Cdn>, CoreError> {
        let records = self.inner.client.list_cdns().await?;
        Ok(records.into_iter().map(Cdn::from).collect())
    }

    async fn create_cdn(&self, cdn: &Cdn) -> Result<Cdn, CoreError> {
        let stored = self.inner.client.create_cdn(&cdn.into()).await?;
        info!(name = %stored.name, id = ?stored.id, "cdn created");
        Ok(stored.into())
    }

    async fn update_cdn(&self, cdn: &Cdn) -> Result<Cdn, CoreError> {
        let id = cdn.id.ok_or_else(|| CoreError::ValidationFailed {
            message: format!("cdn '{}' has no id", cdn.name),
        })?;
        let stored = self.inner.client.update_cdn(id.get(), &cdn.into()).await?;
        info!(name = %stored.name, %id, "cdn updated");
        Ok(stored.into())
    }

    async fn delete_cdn(&self, id: EntityId) -> Result<(), CoreError> {
        self.inner.client.delete_cdn(id.get()).await?;
        info!(%id, "cdn deleted");
        Ok(())
    }

    async fn queue_server_updates(&self, cdn_id: EntityId) -> Result<(), CoreError> {
        self.queue_cdn(cdn_id, QueueAction::Queue).await
    }

    async fn clear_server_updates(&self, cdn_id: EntityId) -> Result<(), CoreError> {
        self.queue_cdn(cdn_id, QueueAction::Dequeue).await
    }
}

impl CacheGroupService for Portal {
    async fn queue_server_updates(
        &self,
        cache_group_id: EntityId,
        cdn_id: EntityId,
    ) -> Result<(), CoreError> {
        self.queue_cache_group(cache_group_id, cdn_id, QueueAction::Queue)
            .await
    }

    async fn clear_server_updates(
        &self,
        cache_group_id: EntityId,
        cdn_id: EntityId,
    ) -> Result<(), CoreError> {
        self.queue_cache_group(cache_group_id, cdn_id, QueueAction::Dequeue)
            .await
    }
}
