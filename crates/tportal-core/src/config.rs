// ── Runtime connection configuration ──
//
// These types describe *how* to reach Traffic Ops. They carry credential
// data and connection tuning, but never touch disk: front ends build a
// `PortalConfig` (usually via tportal-config) and hand it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use tportal_api::client::DEFAULT_API_VERSION;
use tportal_api::transport::{TlsMode, TransportConfig};

/// Session login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (lab installs with self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for one Traffic Ops instance.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Traffic Ops URL (e.g., `https://trafficops.example.net`).
    pub url: Url,
    /// Login credentials.
    pub credentials: Credentials,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
    /// API version path segment.
    pub api_version: String,
}

impl PortalConfig {
    pub fn new(url: Url, credentials: Credentials) -> Self {
        Self {
            url,
            credentials,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            api_version: DEFAULT_API_VERSION.into(),
        }
    }

    /// Translate into the api crate's transport settings.
    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
            cookie_jar: None,
        }
    }
}
