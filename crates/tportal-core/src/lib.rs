//! Controller layer between `tportal-api` and console front ends.
//!
//! This crate owns the view logic of the Traffic Portal console:
//!
//! - **Forms** ([`form`]): [`EditCdnForm`] and [`NewCdnForm`], both built on
//!   the shared [`CdnForm`] base. Save, confirm-then-delete, and the local
//!   display state that follows a successful mutation.
//!
//! - **Tables** ([`table`]): [`ServersTable`] and [`CacheGroupServersTable`],
//!   with row navigation, full-view refresh, and the confirm-then-select-CDN
//!   bulk actions that queue or clear server updates. Rows are presented through
//!   a declarative [`Grid`].
//!
//! - **Utilities** ([`utils`]): delivery-service label tables and chart
//!   links, server status helpers.
//!
//! - **Collaborators**: [`CdnService`] / [`CacheGroupService`] for the
//!   backend, [`Dialogs`] for modal prompts ([`DialogOutcome`] makes cancel an
//!   explicit branch), [`Navigator`] for routing and external windows, and the
//!   closed [`Properties`] configuration value. [`Portal`] implements the
//!   services over the Traffic Ops REST API.

pub mod config;
pub mod convert;
pub mod dialog;
pub mod error;
pub mod form;
pub mod model;
pub mod navigator;
pub mod portal;
pub mod properties;
pub mod service;
pub mod table;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{Credentials, PortalConfig, TlsVerification};
pub use dialog::{DialogOutcome, DialogParams, DialogRequest, DialogSize, DialogTemplate, Dialogs};
pub use error::CoreError;
pub use form::{CdnField, CdnForm, EditCdnForm, FormSettings, NewCdnForm};
pub use navigator::{Navigator, UiEvent, WindowTarget};
pub use portal::Portal;
pub use properties::Properties;
pub use service::{CacheGroupService, CdnService};
pub use table::{BulkAction, CacheGroupServersTable, Grid, GridOptions, PageSize, ServersTable};
pub use utils::{DeliveryServiceUtils, Protocol, QueryStringHandling, ServerUtils};

// Re-export model types at the crate root for ergonomics.
pub use model::{CacheGroup, Cdn, DeliveryService, EntityId, Server};
