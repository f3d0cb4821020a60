use std::sync::Arc;

use super::{BulkAction, ServerRows, picked_id, select_cdn};
use crate::dialog::{DialogOutcome, Dialogs};
use crate::error::CoreError;
use crate::model::{CacheGroup, Cdn, Server};
use crate::navigator::Navigator;
use crate::properties::Properties;
use crate::service::{CacheGroupService, CdnService};
use crate::utils::ServerUtils;

/// Controller for the servers of one cache group.
///
/// Bulk actions are scoped to the cache group: the chosen CDN narrows them
/// further to the group's servers in that CDN.
pub struct CacheGroupServersTable<S, D, N> {
    cache_group: CacheGroup,
    rows: ServerRows<N>,
    service: Arc<S>,
    dialogs: Arc<D>,
}

impl<S, D, N> CacheGroupServersTable<S, D, N>
where
    S: CdnService + CacheGroupService,
    D: Dialogs,
    N: Navigator,
{
    pub fn new(
        cache_group: CacheGroup,
        servers: Vec<Server>,
        service: Arc<S>,
        dialogs: Arc<D>,
        utils: ServerUtils<N>,
        navigator: Arc<N>,
        properties: &Properties,
    ) -> Self {
        Self {
            cache_group,
            rows: ServerRows::new(servers, navigator, utils, properties),
            service,
            dialogs,
        }
    }

    pub fn cache_group(&self) -> &CacheGroup {
        &self.cache_group
    }

    pub fn rows(&self) -> &ServerRows<N> {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut ServerRows<N> {
        &mut self.rows
    }

    pub async fn confirm_queue_server_updates(&mut self) -> Result<DialogOutcome<Cdn>, CoreError> {
        self.confirm_bulk(BulkAction::Queue).await
    }

    pub async fn confirm_clear_server_updates(&mut self) -> Result<DialogOutcome<Cdn>, CoreError> {
        self.confirm_bulk(BulkAction::Clear).await
    }

    async fn confirm_bulk(&mut self, action: BulkAction) -> Result<DialogOutcome<Cdn>, CoreError> {
        let title = format!("{}: {}", action.title(), self.cache_group.name);
        let outcome = select_cdn(&*self.service, &*self.dialogs, title).await?;
        let DialogOutcome::Confirmed(cdn) = &outcome else {
            return Ok(outcome);
        };

        let cdn_id = picked_id(cdn)?;
        let cache_group_id = self.cache_group.id;
        let service = &*self.service;
        match action {
            BulkAction::Queue => {
                CacheGroupService::queue_server_updates(service, cache_group_id, cdn_id).await?;
            }
            BulkAction::Clear => {
                CacheGroupService::clear_server_updates(service, cache_group_id, cdn_id).await?;
            }
        }
        self.rows.refresh();
        Ok(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::EntityId;
    use crate::testing::{
        NavCall, RecordingNavigator, RecordingService, ScriptedDialogs, ServiceCall, sample_cdns,
    };
    use pretty_assertions::assert_eq;

    type Table = CacheGroupServersTable<RecordingService, ScriptedDialogs, RecordingNavigator>;

    fn setup(
        service: RecordingService,
        dialogs: ScriptedDialogs,
    ) -> (Table, Arc<RecordingService>, Arc<ScriptedDialogs>, Arc<RecordingNavigator>) {
        let service = Arc::new(service);
        let dialogs = Arc::new(dialogs);
        let nav = Arc::new(RecordingNavigator::default());
        let props = Properties::default();
        let utils = ServerUtils::new(Arc::clone(&nav), "ops", &props);
        let table = CacheGroupServersTable::new(
            CacheGroup::new(EntityId::new(21), "us-east-mid"),
            vec![Server::default(), Server::default()],
            Arc::clone(&service),
            Arc::clone(&dialogs),
            utils,
            Arc::clone(&nav),
            &props,
        );
        (table, service, dialogs, nav)
    }

    #[tokio::test]
    async fn queue_scoped_to_cache_group() {
        let (mut table, service, dialogs, nav) = setup(
            RecordingService::with_cdns(sample_cdns()),
            ScriptedDialogs::accepting(1),
        );

        let outcome = table.confirm_queue_server_updates().await.unwrap();

        assert!(outcome.is_confirmed());
        assert_eq!(
            service.mutations(),
            vec![ServiceCall::QueueCacheGroup {
                cache_group: EntityId::new(21),
                cdn: EntityId::new(7),
            }]
        );
        assert_eq!(nav.reloads(), 1);
        assert_eq!(
            dialogs.requests()[0].params.title,
            "Queue Server Updates: us-east-mid"
        );
    }

    #[tokio::test]
    async fn clear_scoped_to_cache_group() {
        let (mut table, service, dialogs, nav) = setup(
            RecordingService::with_cdns(sample_cdns()),
            ScriptedDialogs::accepting(1),
        );

        table.confirm_clear_server_updates().await.unwrap();

        assert_eq!(
            service.mutations(),
            vec![ServiceCall::ClearCacheGroup {
                cache_group: EntityId::new(21),
                cdn: EntityId::new(7),
            }]
        );
        assert_eq!(nav.calls(), vec![NavCall::Reload]);
        assert_eq!(
            dialogs.requests()[0].params.title,
            "Clear Server Updates: us-east-mid"
        );
    }

    #[tokio::test]
    async fn cancel_is_a_no_op() {
        let (mut table, service, _, nav) = setup(
            RecordingService::with_cdns(sample_cdns()),
            ScriptedDialogs::dismissing(),
        );

        assert!(table.confirm_queue_server_updates().await.unwrap().is_cancelled());
        assert!(table.confirm_clear_server_updates().await.unwrap().is_cancelled());

        assert!(service.mutations().is_empty());
        assert!(nav.calls().is_empty());
    }

    #[test]
    fn edit_server_route() {
        let (table, _, _, nav) = setup(RecordingService::default(), ScriptedDialogs::dismissing());
        table.rows().edit_server(EntityId::new(42));
        assert_eq!(nav.calls(), vec![NavCall::Navigate("/servers/42".into())]);
        assert_eq!(table.rows().servers().len(), 2);
    }
}
