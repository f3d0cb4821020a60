// ── Delivery service display helpers ──

use std::collections::BTreeMap;
use std::sync::Arc;

use strum::{Display, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};
use tracing::debug;

use crate::model::DeliveryService;
use crate::navigator::{Navigator, UiEvent, WindowTarget, consume};
use crate::properties::Properties;

/// Delivery service protocol, keyed by its backend code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum Protocol {
    #[strum(serialize = "HTTP")]
    Http = 0,
    #[strum(serialize = "HTTPS")]
    Https = 1,
    #[strum(serialize = "HTTP AND HTTPS")]
    HttpAndHttps = 2,
    #[strum(serialize = "HTTP TO HTTPS")]
    HttpToHttps = 3,
}

/// How a delivery service treats query strings, keyed by its backend code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum QueryStringHandling {
    #[strum(serialize = "USE")]
    Use = 0,
    #[strum(serialize = "IGNORE")]
    Ignore = 1,
    #[strum(serialize = "DROP")]
    Drop = 2,
}

impl Protocol {
    /// Decode a backend code; out-of-range codes yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

impl QueryStringHandling {
    /// Decode a backend code; out-of-range codes yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Protocol code → label.
pub fn protocols() -> BTreeMap<u8, &'static str> {
    Protocol::iter().map(|p| (p as u8, p.label())).collect()
}

/// Query-string code → label.
pub fn qstrings() -> BTreeMap<u8, &'static str> {
    QueryStringHandling::iter()
        .map(|q| (q as u8, q.label()))
        .collect()
}

/// Chart links for delivery services.
pub struct DeliveryServiceUtils<N> {
    navigator: Arc<N>,
    charts_base_url: String,
}

impl<N: Navigator> DeliveryServiceUtils<N> {
    pub fn new(navigator: Arc<N>, properties: &Properties) -> Self {
        Self {
            navigator,
            charts_base_url: properties.delivery_services.charts.base_url.clone(),
        }
    }

    /// External chart link: the configured base URL followed by the xmlId.
    pub fn chart_url(&self, ds: &DeliveryService) -> String {
        format!("{}{}", self.charts_base_url, ds.xml_id)
    }

    /// Open the delivery service's charts in a new window.
    pub fn open_charts(&self, ds: &DeliveryService, event: Option<&mut UiEvent>) {
        consume(event);
        let url = self.chart_url(ds);
        debug!(xml_id = %ds.xml_id, %url, "opening delivery service charts");
        self.navigator.open(&url, WindowTarget::Blank);
    }
}
