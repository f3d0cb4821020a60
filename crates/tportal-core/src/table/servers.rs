use std::sync::Arc;

use super::{BulkAction, ServerRows, picked_id, select_cdn};
use crate::dialog::{DialogOutcome, Dialogs};
use crate::error::CoreError;
use crate::model::{Cdn, Server};
use crate::navigator::Navigator;
use crate::properties::Properties;
use crate::service::CdnService;
use crate::utils::ServerUtils;

/// Controller for the all-servers table.
pub struct ServersTable<S, D, N> {
    rows: ServerRows<N>,
    service: Arc<S>,
    dialogs: Arc<D>,
}

impl<S, D, N> ServersTable<S, D, N>
where
    S: CdnService,
    D: Dialogs,
    N: Navigator,
{
    pub fn new(
        servers: Vec<Server>,
        service: Arc<S>,
        dialogs: Arc<D>,
        utils: ServerUtils<N>,
        navigator: Arc<N>,
        properties: &Properties,
    ) -> Self {
        Self {
            rows: ServerRows::new(servers, navigator, utils, properties),
            service,
            dialogs,
        }
    }

    pub fn rows(&self) -> &ServerRows<N> {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut ServerRows<N> {
        &mut self.rows
    }

    pub fn create_server(&self) {
        self.rows.navigate_to_path("/servers/new");
    }

    pub async fn confirm_queue_server_updates(&mut self) -> Result<DialogOutcome<Cdn>, CoreError> {
        self.confirm_bulk(BulkAction::Queue).await
    }

    pub async fn confirm_clear_server_updates(&mut self) -> Result<DialogOutcome<Cdn>, CoreError> {
        self.confirm_bulk(BulkAction::Clear).await
    }

    async fn confirm_bulk(&mut self, action: BulkAction) -> Result<DialogOutcome<Cdn>, CoreError> {
        let outcome = select_cdn(&*self.service, &*self.dialogs, action.title().into()).await?;
        let DialogOutcome::Confirmed(cdn) = &outcome else {
            return Ok(outcome);
        };

        let cdn_id = picked_id(cdn)?;
        match action {
            BulkAction::Queue => self.service.queue_server_updates(cdn_id).await?,
            BulkAction::Clear => self.service.clear_server_updates(cdn_id).await?,
        }
        self.rows.refresh();
        Ok(outcome)
    }
}
