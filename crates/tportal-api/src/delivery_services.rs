// Delivery service endpoints (read-only)

use tracing::debug;

use crate::client::TrafficOpsClient;
use crate::error::Error;
use crate::models::DeliveryServiceRecord;

impl TrafficOpsClient {
    /// List delivery services.
    ///
    /// `GET /api/{version}/deliveryservices`
    pub async fn list_delivery_services(&self) -> Result<Vec<DeliveryServiceRecord>, Error> {
        let url = self.api_url("deliveryservices")?;
        debug!("listing delivery services");
        self.get(url).await
    }

    /// Fetch a single delivery service. Returns `None` if the id matches nothing.
    ///
    /// `GET /api/{version}/deliveryservices/{id}`
    pub async fn get_delivery_service(
        &self,
        id: i64,
    ) -> Result<Option<DeliveryServiceRecord>, Error> {
        let url = self.api_url(&format!("deliveryservices/{id}"))?;
        let services: Vec<DeliveryServiceRecord> = self.get(url).await?;
        Ok(services.into_iter().next())
    }
}
