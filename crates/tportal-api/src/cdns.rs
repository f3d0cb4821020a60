// CDN endpoints
//
// CRUD on `/cdns` plus the CDN-wide `queue_update` command.

use serde_json::json;
use tracing::debug;

use crate::client::TrafficOpsClient;
use crate::error::Error;
use crate::models::{CdnRecord, QueueUpdateResponse};

/// The two `queue_update` actions Traffic Ops accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueAction {
    /// Mark pending configuration changes as ready to deploy.
    Queue,
    /// Revoke the pending state.
    Dequeue,
}

impl QueueAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::Dequeue => "dequeue",
        }
    }
}

impl TrafficOpsClient {
    /// List all CDNs.
    ///
    /// `GET /api/{version}/cdns`
    pub async fn list_cdns(&self) -> Result<Vec<CdnRecord>, Error> {
        let url = self.api_url("cdns")?;
        debug!("listing cdns");
        self.get(url).await
    }

    /// Fetch a single CDN. Returns `None` if the id matches nothing.
    ///
    /// `GET /api/{version}/cdns/{id}` (the payload is a one-element array)
    pub async fn get_cdn(&self, id: i64) -> Result<Option<CdnRecord>, Error> {
        let url = self.api_url(&format!("cdns/{id}"))?;
        let cdns: Vec<CdnRecord> = self.get(url).await?;
        Ok(cdns.into_iter().next())
    }

    /// Create a CDN and return the stored record.
    ///
    /// `POST /api/{version}/cdns`
    pub async fn create_cdn(&self, cdn: &CdnRecord) -> Result<CdnRecord, Error> {
        let url = self.api_url("cdns")?;
        debug!(name = %cdn.name, "creating cdn");
        let endpoint = url.path().to_owned();
        self.post(url, cdn)
            .await?
            .ok_or(Error::EmptyResponse { endpoint })
    }

    /// Replace a CDN and return the stored record.
    ///
    /// `PUT /api/{version}/cdns/{id}`
    pub async fn update_cdn(&self, id: i64, cdn: &CdnRecord) -> Result<CdnRecord, Error> {
        let url = self.api_url(&format!("cdns/{id}"))?;
        debug!(id, name = %cdn.name, "updating cdn");
        let endpoint = url.path().to_owned();
        self.put(url, cdn)
            .await?
            .ok_or(Error::EmptyResponse { endpoint })
    }

    /// Delete a CDN.
    ///
    /// `DELETE /api/{version}/cdns/{id}`
    pub async fn delete_cdn(&self, id: i64) -> Result<(), Error> {
        let url = self.api_url(&format!("cdns/{id}"))?;
        debug!(id, "deleting cdn");
        self.delete(url).await
    }

    /// Queue or clear server updates for every server in a CDN.
    ///
    /// `POST /api/{version}/cdns/{id}/queue_update` with `{"action": "queue"|"dequeue"}`
    pub async fn queue_cdn_updates(
        &self,
        cdn_id: i64,
        action: QueueAction,
    ) -> Result<Option<QueueUpdateResponse>, Error> {
        let url = self.api_url(&format!("cdns/{cdn_id}/queue_update"))?;
        debug!(cdn_id, action = action.as_str(), "queue_update on cdn");
        self.post(url, &json!({ "action": action.as_str() })).await
    }
}
