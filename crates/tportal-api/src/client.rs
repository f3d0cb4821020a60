// Traffic Ops HTTP client
//
// Wraps `reqwest::Client` with versioned URL construction and envelope
// unwrapping. Endpoint groups (cdns, cache groups, servers, delivery
// services) are implemented as inherent methods in separate files to keep
// this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{AlertLevel, Envelope};
use crate::transport::TransportConfig;

/// API version the portal speaks.
pub const DEFAULT_API_VERSION: &str = "1.3";

/// Raw HTTP client for the Traffic Ops API.
///
/// Handles the `{ response, alerts }` envelope and `/api/{version}/`
/// path prefixing. Methods return the unwrapped `response` payload;
/// error alerts become [`Error::TrafficOps`].
#[derive(Debug, Clone)]
pub struct TrafficOpsClient {
    http: reqwest::Client,
    base_url: Url,
    api_version: String,
}

impl TrafficOpsClient {
    /// Create a new client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            api_version: DEFAULT_API_VERSION.into(),
        }
    }

    /// Override the API version segment (`1.3` by default).
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// The underlying HTTP client (for auth flows that need direct access).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The Traffic Ops base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL: `{base}/api/{version}/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/api/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.api_version,
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and return the `response` payload.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let endpoint = url.path().to_owned();
        let resp = self.http.get(url).send().await?;
        let envelope = Self::parse_envelope(resp).await?;
        envelope.response.ok_or(Error::EmptyResponse { endpoint })
    }

    /// Send a POST request with JSON body, returning the payload if any.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<Option<T>, Error> {
        debug!("POST {}", url);
        let resp = self.http.post(url).json(body).send().await?;
        Ok(Self::parse_envelope(resp).await?.response)
    }

    /// Send a PUT request with JSON body, returning the payload if any.
    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<Option<T>, Error> {
        debug!("PUT {}", url);
        let resp = self.http.put(url).json(body).send().await?;
        Ok(Self::parse_envelope(resp).await?.response)
    }

    /// Send a DELETE request. Success alerts are logged, not returned.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {}", url);
        let resp = self.http.delete(url).send().await?;
        let envelope: Envelope<serde_json::Value> = Self::parse_envelope(resp).await?;
        for alert in &envelope.alerts {
            debug!(level = ?alert.level, "{}", alert.text);
        }
        Ok(())
    }

    /// Parse the `{ response, alerts }` envelope.
    ///
    /// 401 maps to [`Error::Authentication`], 403 to [`Error::Forbidden`];
    /// any other non-2xx status becomes [`Error::TrafficOps`] carrying the
    /// text of the `error` alerts (or the raw body when there are none).
    pub(crate) async fn parse_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<Envelope<T>, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Envelope {
                    response: None,
                    alerts: Vec::new(),
                });
            }
            return serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body,
            });
        }

        let message = error_text(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map_or_else(|| body.clone(), str::to_owned)
        });

        match status {
            reqwest::StatusCode::UNAUTHORIZED => Err(Error::Authentication { message }),
            reqwest::StatusCode::FORBIDDEN => Err(Error::Forbidden { message }),
            _ => Err(Error::TrafficOps {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

/// Join the `error`-level alerts of a failed response body.
fn error_text(body: &str) -> Option<String> {
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(body).ok()?;
    let texts: Vec<&str> = envelope
        .alerts
        .iter()
        .filter(|a| a.level == AlertLevel::Error)
        .map(|a| a.text.as_str())
        .collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts.join("; "))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_version_and_path() {
        let client = TrafficOpsClient::with_client(
            reqwest::Client::new(),
            Url::parse("https://to.example.net/").unwrap(),
        );
        let url = client.api_url("cdns/4/queue_update").unwrap();
        assert_eq!(
            url.as_str(),
            "https://to.example.net/api/1.3/cdns/4/queue_update"
        );
    }

    #[test]
    fn api_version_override() {
        let client = TrafficOpsClient::with_client(
            reqwest::Client::new(),
            Url::parse("https://to.example.net").unwrap(),
        )
        .with_api_version("1.2");
        assert_eq!(
            client.api_url("/servers").unwrap().as_str(),
            "https://to.example.net/api/1.2/servers"
        );
    }

    #[test]
    fn error_text_joins_error_alerts() {
        let body = r#"{"alerts":[
            {"level":"error","text":"name is required"},
            {"level":"warning","text":"ignored"},
            {"level":"error","text":"domainName is required"}
        ]}"#;
        assert_eq!(
            error_text(body).as_deref(),
            Some("name is required; domainName is required")
        );
    }

    #[test]
    fn error_text_none_for_non_json() {
        assert!(error_text("<html>oops</html>").is_none());
    }
}
