use thiserror::Error;

/// Top-level error type for the `tportal-api` crate.
///
/// Covers every failure mode of the Traffic Ops client: authentication,
/// transport, alert-carrying API rejections, and payload decoding.
/// `tportal-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed or the session cookie was rejected.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The session is valid but lacks the role required for the operation.
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Traffic Ops ─────────────────────────────────────────────────
    /// Non-success response, with the `error` alerts joined into `message`.
    #[error("Traffic Ops error (HTTP {status}): {message}")]
    TrafficOps { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// A successful response arrived without the expected `response` payload.
    #[error("Response from {endpoint} carried no payload")]
    EmptyResponse { endpoint: String },
}

impl Error {
    /// Returns `true` if this error indicates the session has expired
    /// and logging in again might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::TrafficOps { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::TrafficOps { status: 404, .. } => true,
            _ => false,
        }
    }

    /// HTTP status code attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::TrafficOps { status, .. } => Some(*status),
            Self::Authentication { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            _ => None,
        }
    }
}
