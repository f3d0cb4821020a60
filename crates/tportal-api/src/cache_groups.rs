// Cache group endpoints

use serde_json::json;
use tracing::debug;

use crate::cdns::QueueAction;
use crate::client::TrafficOpsClient;
use crate::error::Error;
use crate::models::{CacheGroupRecord, QueueUpdateResponse};

impl TrafficOpsClient {
    /// Fetch a single cache group. Returns `None` if the id matches nothing.
    ///
    /// `GET /api/{version}/cachegroups/{id}`
    pub async fn get_cache_group(&self, id: i64) -> Result<Option<CacheGroupRecord>, Error> {
        let url = self.api_url(&format!("cachegroups/{id}"))?;
        let groups: Vec<CacheGroupRecord> = self.get(url).await?;
        Ok(groups.into_iter().next())
    }

    /// Queue or clear server updates for the servers of one cache group
    /// that belong to the given CDN.
    ///
    /// `POST /api/{version}/cachegroups/{id}/queue_update`
    /// with `{"action": "queue"|"dequeue", "cdnId": N}`
    pub async fn queue_cache_group_updates(
        &self,
        cache_group_id: i64,
        cdn_id: i64,
        action: QueueAction,
    ) -> Result<Option<QueueUpdateResponse>, Error> {
        let url = self.api_url(&format!("cachegroups/{cache_group_id}/queue_update"))?;
        debug!(
            cache_group_id,
            cdn_id,
            action = action.as_str(),
            "queue_update on cache group"
        );
        self.post(
            url,
            &json!({
                "action": action.as_str(),
                "cdnId": cdn_id,
            }),
        )
        .await
    }
}
