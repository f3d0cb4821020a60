// Traffic Ops authentication
//
// Cookie-based session login/logout. The login endpoint sets the
// `mojolicious` session cookie in the client's jar; subsequent requests
// send it automatically.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::TrafficOpsClient;
use crate::error::Error;
use crate::models::Envelope;

impl TrafficOpsClient {
    /// Authenticate with username/password.
    ///
    /// `POST /api/{version}/user/login` with `{"u": ..., "p": ...}`
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.api_url("user/login")?;
        debug!(username, "logging in at {}", url);

        let body = json!({
            "u": username,
            "p": password.expose_secret(),
        });

        let resp = self.http().post(url).json(&body).send().await?;
        let _: Envelope<serde_json::Value> = Self::parse_envelope(resp).await?;

        debug!("login successful");
        Ok(())
    }

    /// End the current session.
    ///
    /// `POST /api/{version}/user/logout`
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.api_url("user/logout")?;
        debug!("logging out at {}", url);
        let _: Option<serde_json::Value> = self.post(url, &json!({})).await?;
        Ok(())
    }
}
