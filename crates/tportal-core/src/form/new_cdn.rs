use std::sync::Arc;

use super::{CdnForm, FormSettings};
use crate::error::CoreError;
use crate::model::Cdn;
use crate::navigator::Navigator;
use crate::service::CdnService;

/// Controller for creating a CDN. Create-only: no delete, and a fixed
/// header name.
pub struct NewCdnForm<S, N> {
    base: CdnForm<N>,
    service: Arc<S>,
}

impl<S, N> NewCdnForm<S, N>
where
    S: CdnService,
    N: Navigator,
{
    pub fn new(cdn: Cdn, service: Arc<S>, navigator: Arc<N>) -> Self {
        Self {
            base: CdnForm::new(cdn, navigator),
            service,
        }
    }

    pub fn base(&self) -> &CdnForm<N> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut CdnForm<N> {
        &mut self.base
    }

    pub fn cdn_name(&self) -> &'static str {
        "New"
    }

    pub fn settings(&self) -> FormSettings {
        FormSettings::create()
    }

    /// Store `cdn` as a new CDN.
    pub async fn save(&self, cdn: &Cdn) -> Result<Cdn, CoreError> {
        self.service.create_cdn(cdn).await
    }
}
