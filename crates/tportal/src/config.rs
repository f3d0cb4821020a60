//! CLI configuration -- thin wrapper around `tportal_config`.
//!
//! Adds the `GlobalOpts` overrides (--url, --username, --insecure,
//! --timeout) on top of the shared profile resolution.

use std::time::Duration;

use tportal_core::{PortalConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use tportal_config::{Config, Profile, config_path, load_config};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the `PortalConfig` for this invocation.
///
/// With a matching profile, flags override its fields. Without one,
/// `--url` and `--username` (or their env vars) must carry everything.
pub fn resolve_portal_config(global: &GlobalOpts, cfg: &Config) -> Result<PortalConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let mut profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.url.is_some() => Profile::default(),
        None => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                path: config_path().display().to_string(),
            });
        }
    };

    if let Some(url) = &global.url {
        profile.url.clone_from(url);
    }
    if let Some(username) = &global.username {
        profile.username = Some(username.clone());
    }

    let mut portal =
        tportal_config::profile_to_portal_config(&profile, &profile_name, &cfg.defaults)?;
    if global.insecure {
        portal.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        portal.timeout = Duration::from_secs(secs);
    }
    Ok(portal)
}

/// Traffic Portal base URL for printed links, if the profile has one.
pub fn portal_url(global: &GlobalOpts, cfg: &Config) -> Option<String> {
    cfg.profiles
        .get(&active_profile_name(global, cfg))
        .and_then(|p| p.portal_url.clone())
}
