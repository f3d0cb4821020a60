// Server endpoints

use tracing::debug;

use crate::client::TrafficOpsClient;
use crate::error::Error;
use crate::models::ServerRecord;

impl TrafficOpsClient {
    /// List servers, optionally restricted to one cache group.
    ///
    /// `GET /api/{version}/servers[?cachegroup={id}]`
    pub async fn list_servers(&self, cache_group_id: Option<i64>) -> Result<Vec<ServerRecord>, Error> {
        let mut url = self.api_url("servers")?;
        if let Some(id) = cache_group_id {
            url.query_pairs_mut()
                .append_pair("cachegroup", &id.to_string());
        }
        debug!(?cache_group_id, "listing servers");
        self.get(url).await
    }
}
