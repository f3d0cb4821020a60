// ── In-crate fakes for controller tests ──

#![allow(clippy::unwrap_used)]

use std::fmt;
use std::sync::Mutex;

use crate::dialog::{DialogOutcome, DialogRequest, Dialogs};
use crate::error::CoreError;
use crate::model::{Cdn, EntityId};
use crate::navigator::{Navigator, WindowTarget};
use crate::service::{CacheGroupService, CdnService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    GetCdns,
    CreateCdn(String),
    UpdateCdn(String),
    DeleteCdn(EntityId),
    QueueCdn(EntityId),
    ClearCdn(EntityId),
    QueueCacheGroup { cache_group: EntityId, cdn: EntityId },
    ClearCacheGroup { cache_group: EntityId, cdn: EntityId },
}

/// Backend fake implementing both service traits. Records every call;
/// mutations fail with an API error when built with [`Self::failing`].
#[derive(Debug, Default)]
pub struct RecordingService {
    cdns: Vec<Cdn>,
    failure: Option<String>,
    calls: Mutex<Vec<ServiceCall>>,
}

impl RecordingService {
    pub fn with_cdns(cdns: Vec<Cdn>) -> Self {
        Self {
            cdns,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self::default().fail_mutations(message)
    }

    pub fn fail_mutations(mut self, message: &str) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than the CDN listing that feeds selection dialogs.
    pub fn mutations(&self) -> Vec<ServiceCall> {
        self.calls()
            .into_iter()
            .filter(|c| *c != ServiceCall::GetCdns)
            .collect()
    }

    fn record(&self, call: ServiceCall) -> Result<(), CoreError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(CoreError::Api {
                message: message.clone(),
                status: Some(400),
            }),
            None => Ok(()),
        }
    }
}

impl CdnService for RecordingService {
    async fn get_cdns(&self) -> Result<Vec<Cdn>, CoreError> {
        self.calls.lock().unwrap().push(ServiceCall::GetCdns);
        Ok(self.cdns.clone())
    }

    async fn create_cdn(&self, cdn: &Cdn) -> Result<Cdn, CoreError> {
        self.record(ServiceCall::CreateCdn(cdn.name.clone()))?;
        Ok(Cdn {
            id: Some(EntityId::new(100)),
            ..cdn.clone()
        })
    }

    async fn update_cdn(&self, cdn: &Cdn) -> Result<Cdn, CoreError> {
        self.record(ServiceCall::UpdateCdn(cdn.name.clone()))?;
        Ok(cdn.clone())
    }

    async fn delete_cdn(&self, id: EntityId) -> Result<(), CoreError> {
        self.record(ServiceCall::DeleteCdn(id))
    }

    async fn queue_server_updates(&self, cdn_id: EntityId) -> Result<(), CoreError> {
        self.record(ServiceCall::QueueCdn(cdn_id))
    }

    async fn clear_server_updates(&self, cdn_id: EntityId) -> Result<(), CoreError> {
        self.record(ServiceCall::ClearCdn(cdn_id))
    }
}

impl CacheGroupService for RecordingService {
    async fn queue_server_updates(
        &self,
        cache_group_id: EntityId,
        cdn_id: EntityId,
    ) -> Result<(), CoreError> {
        self.record(ServiceCall::QueueCacheGroup {
            cache_group: cache_group_id,
            cdn: cdn_id,
        })
    }

    async fn clear_server_updates(
        &self,
        cache_group_id: EntityId,
        cdn_id: EntityId,
    ) -> Result<(), CoreError> {
        self.record(ServiceCall::ClearCacheGroup {
            cache_group: cache_group_id,
            cdn: cdn_id,
        })
    }
}

/// Dialog host with canned answers. Records each request and the labels
/// offered to selection dialogs.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    confirm: bool,
    pick: Option<usize>,
    requests: Mutex<Vec<DialogRequest>>,
    offered: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    /// Every dialog is affirmed; selections pick the choice at `pick`.
    pub fn accepting(pick: usize) -> Self {
        Self {
            confirm: true,
            pick: Some(pick),
            ..Self::default()
        }
    }

    /// Every dialog is dismissed.
    pub fn dismissing() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<DialogRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn offered(&self) -> Vec<String> {
        self.offered.lock().unwrap().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    async fn confirm(&self, request: &DialogRequest) -> DialogOutcome<()> {
        self.requests.lock().unwrap().push(request.clone());
        if self.confirm {
            DialogOutcome::Confirmed(())
        } else {
            DialogOutcome::Cancelled
        }
    }

    async fn select<T>(&self, request: &DialogRequest, choices: Vec<T>) -> DialogOutcome<T>
    where
        T: fmt::Display + Send,
    {
        self.requests.lock().unwrap().push(request.clone());
        self.offered
            .lock()
            .unwrap()
            .extend(choices.iter().map(ToString::to_string));
        match self.pick.and_then(|i| choices.into_iter().nth(i)) {
            Some(choice) => DialogOutcome::Confirmed(choice),
            None => DialogOutcome::Cancelled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCall {
    Navigate(String),
    Reload,
    ScrollToTop,
    Open(String, WindowTarget),
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<NavCall>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<NavCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn reloads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| **c == NavCall::Reload)
            .count()
    }

    fn push(&self, call: NavCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to_path(&self, path: &str) {
        self.push(NavCall::Navigate(path.into()));
    }

    fn reload(&self) {
        self.push(NavCall::Reload);
    }

    fn scroll_to_top(&self) {
        self.push(NavCall::ScrollToTop);
    }

    fn open(&self, url: &str, target: WindowTarget) {
        self.push(NavCall::Open(url.into(), target));
    }
}

/// Three CDNs with ids 3, 7, 9.
pub fn sample_cdns() -> Vec<Cdn> {
    [(3, "cdn-east"), (7, "cdn-west"), (9, "cdn-lab")]
        .into_iter()
        .map(|(id, name)| Cdn {
            id: Some(EntityId::new(id)),
            ..Cdn::new(name, format!("{name}.example.net"))
        })
        .collect()
}
