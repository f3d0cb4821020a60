//! Server table controllers.
//!
//! [`ServersTable`] lists every server; [`CacheGroupServersTable`] lists the
//! servers of one cache group. Both share [`ServerRows`] for the grid, row
//! navigation and refresh, and both offer the same pair of bulk actions:
//! pick a CDN, then queue or clear server updates across it.

mod cache_group_servers;
mod grid;
mod servers;

use std::sync::Arc;

use tracing::debug;

use crate::dialog::{DialogOutcome, DialogRequest, Dialogs};
use crate::error::CoreError;
use crate::model::{Cdn, EntityId, Server};
use crate::navigator::Navigator;
use crate::properties::Properties;
use crate::service::CdnService;
use crate::utils::ServerUtils;

pub use cache_group_servers::CacheGroupServersTable;
pub use grid::{Grid, GridOptions, GridRow, PageSize, SortOrder};
pub use servers::ServersTable;

/// The two bulk server-update commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Queue,
    Clear,
}

impl BulkAction {
    pub fn title(self) -> &'static str {
        match self {
            Self::Queue => "Queue Server Updates",
            Self::Clear => "Clear Server Updates",
        }
    }
}

/// Rows, row helpers and routing shared by both table variants.
pub struct ServerRows<N> {
    grid: Grid<Server>,
    navigator: Arc<N>,
    utils: ServerUtils<N>,
    show_charts_button: bool,
}

impl<N: Navigator> ServerRows<N> {
    pub(crate) fn new(
        servers: Vec<Server>,
        navigator: Arc<N>,
        utils: ServerUtils<N>,
        properties: &Properties,
    ) -> Self {
        Self {
            grid: Grid::new(servers, GridOptions::servers()),
            navigator,
            utils,
            show_charts_button: properties.servers.charts.show,
        }
    }

    pub fn servers(&self) -> &[Server] {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid<Server> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid<Server> {
        &mut self.grid
    }

    pub fn server_utils(&self) -> &ServerUtils<N> {
        &self.utils
    }

    pub fn show_charts_button(&self) -> bool {
        self.show_charts_button
    }

    pub fn edit_server(&self, id: EntityId) {
        self.navigate_to_path(&format!("/servers/{id}"));
    }

    pub fn navigate_to_path(&self, path: &str) {
        debug!(path, "navigating");
        self.navigator.navigate_to_path(path);
    }

    /// Reload the whole view, re-resolving its data.
    pub fn refresh(&self) {
        debug!("reloading view");
        self.navigator.reload();
    }
}

/// Fetch all CDNs and let the user pick one.
async fn select_cdn<S, D>(
    service: &S,
    dialogs: &D,
    title: String,
) -> Result<DialogOutcome<Cdn>, CoreError>
where
    S: CdnService,
    D: Dialogs,
{
    let cdns = service.get_cdns().await?;
    let request = DialogRequest::select(title, "Please select a CDN");
    debug!(title = %request.params.title, choices = cdns.len(), "opening cdn selection");
    let outcome = dialogs.select(&request, cdns).await;
    if outcome.is_cancelled() {
        debug!("cdn selection cancelled");
    }
    Ok(outcome)
}

/// Id of a CDN picked from the backend listing.
fn picked_id(cdn: &Cdn) -> Result<EntityId, CoreError> {
    cdn.id
        .ok_or_else(|| CoreError::Internal(format!("cdn '{}' listed without an id", cdn.name)))
}
