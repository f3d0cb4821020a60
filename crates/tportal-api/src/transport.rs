// HTTP settings for talking to Traffic Ops.
//
// Traffic Ops authenticates with a `mojolicious` session cookie, so every
// client built here carries a cookie store. Callers may share one jar
// between clients to reuse a login.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;
use reqwest::cookie::Jar;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::error::Error;

const USER_AGENT: &str = concat!("tportal/", env!("CARGO_PKG_VERSION"));

/// How the Traffic Ops certificate is checked.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Trust the CA in the given PEM file as well.
    CustomCa(PathBuf),
    /// Accept any certificate (lab installs with self-signed certs).
    DangerAcceptInvalid,
}

impl TlsMode {
    fn configure(&self, builder: ClientBuilder) -> Result<ClientBuilder, Error> {
        Ok(match self {
            Self::System => builder,
            Self::CustomCa(path) => builder.add_root_certificate(load_ca(path)?),
            Self::DangerAcceptInvalid => builder.danger_accept_invalid_certs(true),
        })
    }
}

fn load_ca(path: &Path) -> Result<reqwest::Certificate, Error> {
    let pem = std::fs::read(path)
        .map_err(|e| Error::Tls(format!("failed to read CA cert {}: {e}", path.display())))?;
    reqwest::Certificate::from_pem(&pem)
        .map_err(|e| Error::Tls(format!("invalid CA cert {}: {e}", path.display())))
}

#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
    /// Session cookie store. `None` gives each client its own.
    pub cookie_jar: Option<Arc<Jar>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
            cookie_jar: None,
        }
    }
}

impl TransportConfig {
    /// Build a JSON-speaking client holding the Traffic Ops session cookie.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let jar = self.cookie_jar.clone().unwrap_or_default();
        let builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .cookie_provider(jar);

        self.tls
            .configure(builder)?
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Pin a fresh cookie jar so clones of this config share one session.
    #[must_use]
    pub fn with_cookie_jar(mut self) -> Self {
        self.cookie_jar = Some(Arc::new(Jar::default()));
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_checks_system_certs() {
        let config = TransportConfig::default();
        assert!(matches!(config.tls, TlsMode::System));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.cookie_jar.is_none());
        assert!(config.build_client().is_ok());
    }

    #[test]
    fn clones_share_a_pinned_jar() {
        let config = TransportConfig::default().with_cookie_jar();
        let copy = config.clone();
        assert!(Arc::ptr_eq(
            config.cookie_jar.as_ref().unwrap(),
            copy.cookie_jar.as_ref().unwrap()
        ));
    }

    #[test]
    fn missing_ca_file_is_a_tls_error() {
        let config = TransportConfig {
            tls: TlsMode::CustomCa("/nonexistent/traffic-ops-ca.pem".into()),
            ..TransportConfig::default()
        };
        let err = config.build_client().unwrap_err();
        assert!(matches!(&err, Error::Tls(msg) if msg.contains("traffic-ops-ca.pem")));
    }
}
