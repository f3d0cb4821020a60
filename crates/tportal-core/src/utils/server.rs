// ── Server status and link helpers ──

use std::sync::Arc;

use tracing::debug;

use crate::model::Server;
use crate::navigator::{Navigator, UiEvent, WindowTarget, consume};
use crate::properties::Properties;

const OFFLINE_STATUSES: [&str; 2] = ["OFFLINE", "ADMIN_DOWN"];

/// Row helpers for server tables: offline classification and the
/// ssh / monitor / chart links.
pub struct ServerUtils<N> {
    navigator: Arc<N>,
    /// Login name used in ssh links.
    username: String,
    charts_base_url: String,
}

impl<N> Clone for ServerUtils<N> {
    fn clone(&self) -> Self {
        Self {
            navigator: Arc::clone(&self.navigator),
            username: self.username.clone(),
            charts_base_url: self.charts_base_url.clone(),
        }
    }
}

/// `OFFLINE` and `ADMIN_DOWN` servers take no traffic.
pub fn is_offline(status: &str) -> bool {
    OFFLINE_STATUSES.contains(&status)
}

pub fn offline_reason(server: &Server) -> &str {
    server
        .offline_reason
        .as_deref()
        .filter(|reason| !reason.is_empty())
        .unwrap_or("N/A")
}

/// The cache's astats page.
pub fn monitor_url(server: &Server) -> String {
    format!("http://{}/_astats", server.fqdn())
}

impl<N: Navigator> ServerUtils<N> {
    pub fn new(navigator: Arc<N>, username: impl Into<String>, properties: &Properties) -> Self {
        Self {
            navigator,
            username: username.into(),
            charts_base_url: properties.servers.charts.base_url.clone(),
        }
    }

    pub fn ssh_url(&self, ip: &str) -> String {
        format!("ssh://{}@{ip}", self.username)
    }

    pub fn chart_url(&self, server: &Server) -> String {
        format!("{}{}", self.charts_base_url, server.host_name)
    }

    /// Hand the ssh link to the current window.
    pub fn ssh(&self, ip: &str, event: Option<&mut UiEvent>) {
        consume(event);
        let url = self.ssh_url(ip);
        debug!(%url, "opening ssh link");
        self.navigator.open(&url, WindowTarget::SelfWindow);
    }

    /// Open the cache's astats page in a new window.
    pub fn goto_monitor(&self, server: &Server, event: Option<&mut UiEvent>) {
        consume(event);
        let url = monitor_url(server);
        debug!(host = %server.host_name, %url, "opening cache monitor");
        self.navigator.open(&url, WindowTarget::Blank);
    }

    pub fn open_charts(&self, server: &Server, event: Option<&mut UiEvent>) {
        consume(event);
        let url = self.chart_url(server);
        debug!(host = %server.host_name, %url, "opening server charts");
        self.navigator.open(&url, WindowTarget::Blank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityId;
    use crate::testing::{NavCall, RecordingNavigator};
    use pretty_assertions::assert_eq;

    fn edge() -> Server {
        Server {
            id: EntityId::new(42),
            host_name: "edge-01".into(),
            domain_name: "cdn.example.net".into(),
            ip_address: Some("10.0.0.42".into()),
            status: "REPORTED".into(),
            ..Server::default()
        }
    }

    fn utils() -> (Arc<RecordingNavigator>, ServerUtils<RecordingNavigator>) {
        let nav = Arc::new(RecordingNavigator::default());
        let mut props = Properties::default();
        props.servers.charts.base_url = "https://grafana.example.net/host?var-host=".into();
        (Arc::clone(&nav), ServerUtils::new(nav, "ops", &props))
    }

    #[test]
    fn offline_statuses() {
        assert!(is_offline("OFFLINE"));
        assert!(is_offline("ADMIN_DOWN"));
        assert!(!is_offline("ONLINE"));
        assert!(!is_offline("REPORTED"));
    }

    #[test]
    fn offline_reason_defaults_to_na() {
        let mut server = edge();
        assert_eq!(offline_reason(&server), "N/A");
        server.offline_reason = Some("disk replacement".into());
        assert_eq!(offline_reason(&server), "disk replacement");
        server.offline_reason = Some(String::new());
        assert_eq!(offline_reason(&server), "N/A");
    }

    #[test]
    fn monitor_url_uses_fqdn() {
        assert_eq!(monitor_url(&edge()), "http://edge-01.cdn.example.net/_astats");
    }

    #[test]
    fn ssh_assigns_current_window() {
        let (nav, utils) = utils();
        let mut event = UiEvent::new();
        utils.ssh("10.0.0.42", Some(&mut event));

        assert!(event.is_propagation_stopped());
        assert_eq!(
            nav.calls(),
            vec![NavCall::Open("ssh://ops@10.0.0.42".into(), WindowTarget::SelfWindow)]
        );
    }

    #[test]
    fn monitor_and_charts_open_new_windows() {
        let (nav, utils) = utils();
        let server = edge();
        utils.goto_monitor(&server, None);
        utils.open_charts(&server, None);

        assert_eq!(
            nav.calls(),
            vec![
                NavCall::Open(
                    "http://edge-01.cdn.example.net/_astats".into(),
                    WindowTarget::Blank
                ),
                NavCall::Open(
                    "https://grafana.example.net/host?var-host=edge-01".into(),
                    WindowTarget::Blank
                ),
            ]
        );
    }
}
