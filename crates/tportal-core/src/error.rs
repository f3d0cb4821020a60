// ── Core error types ──
//
// User-facing errors from tportal-core. Consumers never see raw HTTP
// status codes or JSON parse failures: the `From<tportal_api::Error>` impl
// translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to Traffic Ops at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Traffic Ops request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Entity not found: {entity_type} with id {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.to_string(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<tportal_api::Error> for CoreError {
    fn from(err: tportal_api::Error) -> Self {
        match err {
            tportal_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            tportal_api::Error::Forbidden { message } => CoreError::PermissionDenied { message },
            tportal_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            tportal_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            tportal_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            tportal_api::Error::TrafficOps {
                status: 404,
                message,
            } => CoreError::NotFound {
                entity_type: "resource".into(),
                identifier: message,
            },
            tportal_api::Error::TrafficOps { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            tportal_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
            tportal_api::Error::EmptyResponse { endpoint } => {
                CoreError::Internal(format!("Empty response from {endpoint}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traffic_ops_rejection_keeps_status() {
        let err: CoreError = tportal_api::Error::TrafficOps {
            status: 400,
            message: "name is required".into(),
        }
        .into();
        match err {
            CoreError::Api { message, status } => {
                assert_eq!(message, "name is required");
                assert_eq!(status, Some(400));
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn forbidden_maps_to_permission_denied() {
        let err: CoreError = tportal_api::Error::Forbidden {
            message: "operations role required".into(),
        }
        .into();
        assert!(matches!(err, CoreError::PermissionDenied { .. }));
    }

    #[test]
    fn missing_resource_maps_to_not_found() {
        let err: CoreError = tportal_api::Error::TrafficOps {
            status: 404,
            message: "cdn not found".into(),
        }
        .into();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }
}
