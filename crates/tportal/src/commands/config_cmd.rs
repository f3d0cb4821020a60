//! Config subcommand handlers.

use secrecy::SecretString;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

const REDACTED: &str = "********";

const PROFILE_KEYS: &str = "url, portal_url, username, password_env, ca_cert, insecure, timeout";

/// Replace plaintext passwords before display.
fn redact(mut cfg: Config) -> Config {
    for profile in cfg.profiles.values_mut() {
        if profile.password.is_some() {
            profile.password = Some(REDACTED.into());
        }
    }
    cfg
}

fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn invalid(field: &str, reason: &str) -> CliError {
    CliError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

fn set_field(cfg: &mut Config, profile_name: &str, key: &str, value: String) -> Result<(), CliError> {
    let profile = cfg.profiles.entry(profile_name.to_owned()).or_default();
    match key {
        "url" => profile.url = value,
        "portal_url" | "portal-url" => profile.portal_url = Some(value),
        "username" => profile.username = Some(value),
        "password_env" | "password-env" => profile.password_env = Some(value),
        "ca_cert" | "ca-cert" => profile.ca_cert = Some(value.into()),
        "insecure" => {
            profile.insecure = Some(
                value
                    .parse()
                    .map_err(|_| invalid("insecure", "must be 'true' or 'false'"))?,
            );
        }
        "timeout" => {
            profile.timeout = Some(
                value
                    .parse()
                    .map_err(|_| invalid("timeout", "must be a number (seconds)"))?,
            );
        }
        other => {
            return Err(invalid(
                other,
                &format!("unknown config key '{other}'. Valid keys: {PROFILE_KEYS}"),
            ));
        }
    }
    Ok(())
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = redact(tportal_config::load_config_or_default());
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| {
                    toml::to_string_pretty(c)
                        .unwrap_or_else(|e| format!("# failed to render config: {e}"))
                },
                |_| config::config_path().display().to_string(),
            )?;
            output::notice(
                &format!("# {}", config::config_path().display()),
                global.quiet,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);
            set_field(&mut cfg, &profile_name, &key, value)?;
            tportal_config::save_config(&cfg)?;
            output::notice(&format!("Set {key} on profile '{profile_name}'"), global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = tportal_config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                output::notice("No profiles configured. Run: tportal config set url <URL>", global.quiet);
            } else {
                let mut names: Vec<_> = cfg.profiles.keys().collect();
                names.sort();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    name,
                    path: config::config_path().display().to_string(),
                });
            }
            cfg.default_profile = Some(name.clone());
            tportal_config::save_config(&cfg)?;
            output::notice(&format!("Default profile set to '{name}'"), global.quiet);
            Ok(())
        }

        ConfigCommand::SetPassword => {
            let cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);
            let password = rpassword::prompt_password(format!("Password for '{profile_name}': "))
                .map_err(prompt_err)?;
            if password.is_empty() {
                return Err(invalid("password", "password cannot be empty"));
            }
            tportal_config::store_password(&profile_name, &SecretString::from(password))?;
            output::notice(
                &format!("Password for profile '{profile_name}' stored in system keyring"),
                global.quiet,
            );
            Ok(())
        }
    }
}
