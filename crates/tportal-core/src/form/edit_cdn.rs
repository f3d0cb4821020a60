use std::sync::Arc;

use tracing::debug;

use super::{CdnForm, FormSettings};
use crate::dialog::{DialogOutcome, DialogRequest, Dialogs};
use crate::error::CoreError;
use crate::model::Cdn;
use crate::navigator::Navigator;
use crate::service::CdnService;

const CDNS_PATH: &str = "/admin/cdns";

/// Controller for editing an existing CDN.
pub struct EditCdnForm<S, D, N> {
    base: CdnForm<N>,
    service: Arc<S>,
    dialogs: Arc<D>,
    cdn_name: String,
}

impl<S, D, N> EditCdnForm<S, D, N>
where
    S: CdnService,
    D: Dialogs,
    N: Navigator,
{
    pub fn new(cdn: Cdn, service: Arc<S>, dialogs: Arc<D>, navigator: Arc<N>) -> Self {
        let cdn_name = cdn.name.clone();
        Self {
            base: CdnForm::new(cdn, navigator),
            service,
            dialogs,
            cdn_name,
        }
    }

    pub fn base(&self) -> &CdnForm<N> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut CdnForm<N> {
        &mut self.base
    }

    /// Name shown in the view header; tracks the last successful save.
    pub fn cdn_name(&self) -> &str {
        &self.cdn_name
    }

    pub fn settings(&self) -> FormSettings {
        FormSettings::edit()
    }

    /// Persist `cdn`. On success the header name follows the saved name and
    /// the view scrolls back to the top.
    pub async fn save(&mut self, cdn: &Cdn) -> Result<Cdn, CoreError> {
        let stored = self.service.update_cdn(cdn).await?;
        self.cdn_name.clone_from(&cdn.name);
        self.base.navigator().scroll_to_top();
        Ok(stored)
    }

    /// Ask for confirmation, then delete `cdn` and return to the CDN list.
    ///
    /// A dismissed dialog returns [`DialogOutcome::Cancelled`] with nothing
    /// deleted.
    pub async fn confirm_delete(&mut self, cdn: &Cdn) -> Result<DialogOutcome<()>, CoreError> {
        let id = cdn.id.ok_or_else(|| CoreError::ValidationFailed {
            message: format!("cdn '{}' has not been saved", cdn.name),
        })?;

        let request = DialogRequest::confirm("Confirm Delete", delete_message(&cdn.name));
        debug!(%id, "opening delete confirmation");
        let outcome = self.dialogs.confirm(&request).await;
        if outcome.is_cancelled() {
            debug!(%id, "delete cancelled");
            return Ok(outcome);
        }

        self.service.delete_cdn(id).await?;
        self.base.navigate_to_path(CDNS_PATH);
        Ok(outcome)
    }
}

fn delete_message(name: &str) -> String {
    format!(
        "This action CANNOT be undone. This will permanently delete {name}. \
         Are you sure you want to delete {name}?"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::EntityId;
    use crate::testing::{NavCall, RecordingNavigator, RecordingService, ScriptedDialogs, ServiceCall};
    use pretty_assertions::assert_eq;

    type Form = EditCdnForm<RecordingService, ScriptedDialogs, RecordingNavigator>;

    fn foo() -> Cdn {
        Cdn {
            id: Some(EntityId::new(12)),
            ..Cdn::new("Foo", "foo.example.net")
        }
    }

    fn setup(
        service: RecordingService,
        dialogs: ScriptedDialogs,
    ) -> (Form, Arc<RecordingService>, Arc<ScriptedDialogs>, Arc<RecordingNavigator>) {
        let service = Arc::new(service);
        let dialogs = Arc::new(dialogs);
        let nav = Arc::new(RecordingNavigator::default());
        let form = EditCdnForm::new(
            foo(),
            Arc::clone(&service),
            Arc::clone(&dialogs),
            Arc::clone(&nav),
        );
        (form, service, dialogs, nav)
    }

    #[test]
    fn settings_show_delete() {
        let (form, ..) = setup(RecordingService::default(), ScriptedDialogs::dismissing());
        let settings = form.settings();
        assert!(settings.show_delete);
        assert!(!settings.is_new);
        assert_eq!(settings.save_label, "Update");
        assert_eq!(form.cdn_name(), "Foo");
    }

    #[tokio::test]
    async fn save_updates_name_and_scrolls() {
        let (mut form, service, _, nav) =
            setup(RecordingService::default(), ScriptedDialogs::dismissing());
        let edited = Cdn {
            name: "Bar".into(),
            ..foo()
        };

        form.save(&edited).await.unwrap();

        assert_eq!(form.cdn_name(), "Bar");
        assert_eq!(service.calls(), vec![ServiceCall::UpdateCdn("Bar".into())]);
        assert_eq!(nav.calls(), vec![NavCall::ScrollToTop]);
    }

    #[tokio::test]
    async fn failed_save_leaves_state_alone() {
        let (mut form, _, _, nav) = setup(
            RecordingService::failing("name already exists"),
            ScriptedDialogs::dismissing(),
        );
        let edited = Cdn {
            name: "Bar".into(),
            ..foo()
        };

        let err = form.save(&edited).await.unwrap_err();

        assert!(matches!(err, CoreError::Api { .. }));
        assert_eq!(form.cdn_name(), "Foo");
        assert!(nav.calls().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_removes_and_navigates() {
        let (mut form, service, dialogs, nav) =
            setup(RecordingService::default(), ScriptedDialogs::accepting(0));

        let outcome = form.confirm_delete(&foo()).await.unwrap();

        assert!(outcome.is_confirmed());
        let request = &dialogs.requests()[0];
        assert_eq!(request.params.title, "Confirm Delete");
        assert_eq!(
            request.params.message,
            "This action CANNOT be undone. This will permanently delete Foo. \
             Are you sure you want to delete Foo?"
        );
        assert_eq!(service.calls(), vec![ServiceCall::DeleteCdn(EntityId::new(12))]);
        assert_eq!(nav.calls(), vec![NavCall::Navigate("/admin/cdns".into())]);
    }

    #[tokio::test]
    async fn cancelled_delete_does_nothing() {
        let (mut form, service, _, nav) =
            setup(RecordingService::default(), ScriptedDialogs::dismissing());

        let outcome = form.confirm_delete(&foo()).await.unwrap();

        assert!(outcome.is_cancelled());
        assert!(service.calls().is_empty());
        assert!(nav.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_stays_on_view() {
        let (mut form, _, _, nav) = setup(
            RecordingService::failing("cdn has servers"),
            ScriptedDialogs::accepting(0),
        );

        assert!(form.confirm_delete(&foo()).await.is_err());
        assert!(nav.calls().is_empty());
    }

    #[tokio::test]
    async fn unsaved_cdn_cannot_be_deleted() {
        let (mut form, _, dialogs, _) =
            setup(RecordingService::default(), ScriptedDialogs::accepting(0));

        let err = form.confirm_delete(&Cdn::new("draft", "d.net")).await.unwrap_err();

        assert!(matches!(err, CoreError::ValidationFailed { .. }));
        assert!(dialogs.requests().is_empty());
    }
}
