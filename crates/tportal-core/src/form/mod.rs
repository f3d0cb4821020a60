//! CDN form controllers.
//!
//! [`EditCdnForm`] and [`NewCdnForm`] each own a [`CdnForm`]: the CDN under
//! edit, the DNSSEC option list, field validation, and navigation. The
//! wrappers add their own save semantics and [`FormSettings`].

mod edit_cdn;
mod new_cdn;

use std::sync::Arc;

use strum::{Display, EnumIter};

use crate::error::CoreError;
use crate::model::Cdn;
use crate::navigator::Navigator;

pub use edit_cdn::EditCdnForm;
pub use new_cdn::NewCdnForm;

/// Editable CDN fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CdnField {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "domainName")]
    DomainName,
}

/// Presentation flags for the shared form template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    pub is_new: bool,
    pub show_delete: bool,
    pub save_label: &'static str,
}

impl FormSettings {
    pub(crate) const fn edit() -> Self {
        Self {
            is_new: false,
            show_delete: true,
            save_label: "Update",
        }
    }

    pub(crate) const fn create() -> Self {
        Self {
            is_new: true,
            show_delete: false,
            save_label: "Create",
        }
    }
}

/// One entry of the DNSSEC drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnssecOption {
    pub value: bool,
    pub label: &'static str,
}

const DNSSEC_OPTIONS: [DnssecOption; 2] = [
    DnssecOption {
        value: true,
        label: "true",
    },
    DnssecOption {
        value: false,
        label: "false",
    },
];

/// State and behaviour common to both CDN forms.
pub struct CdnForm<N> {
    cdn: Cdn,
    navigator: Arc<N>,
}

impl<N: Navigator> CdnForm<N> {
    pub fn new(cdn: Cdn, navigator: Arc<N>) -> Self {
        Self { cdn, navigator }
    }

    pub fn cdn(&self) -> &Cdn {
        &self.cdn
    }

    pub fn cdn_mut(&mut self) -> &mut Cdn {
        &mut self.cdn
    }

    pub fn dnssec_options(&self) -> &'static [DnssecOption] {
        &DNSSEC_OPTIONS
    }

    pub fn navigate_to_path(&self, path: &str) {
        tracing::debug!(path, "navigating");
        self.navigator.navigate_to_path(path);
    }

    pub(crate) fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Whether `field` of the CDN under edit is currently invalid.
    pub fn has_error(&self, field: CdnField) -> bool {
        field_error(&self.cdn, field).is_some()
    }

    /// Check every field, reporting the first failure.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate(&self.cdn)
    }
}

/// Check every editable field of `cdn`.
pub fn validate(cdn: &Cdn) -> Result<(), CoreError> {
    for field in [CdnField::Name, CdnField::DomainName] {
        if let Some(problem) = field_error(cdn, field) {
            return Err(CoreError::ValidationFailed {
                message: format!("{field} {problem}"),
            });
        }
    }
    Ok(())
}

fn field_error(cdn: &Cdn, field: CdnField) -> Option<&'static str> {
    match field {
        CdnField::Name if cdn.name.trim().is_empty() => Some("is required"),
        CdnField::Name if !cdn.name.chars().all(is_name_char) => {
            Some("may only contain letters, digits, '-', '_' and '.'")
        }
        CdnField::DomainName if cdn.domain_name.trim().is_empty() => Some("is required"),
        _ => None,
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}
