//! CDN command handlers.

use std::sync::Arc;

use tabled::Tabled;

use tportal_core::{Cdn, CdnService, DialogOutcome, EditCdnForm, NewCdnForm};

use crate::cli::{CdnsArgs, CdnsCommand, GlobalOpts};
use crate::console::TerminalDialogs;
use crate::error::CliError;
use crate::output;

use super::{Session, util};

#[derive(Tabled)]
struct CdnRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "DNSSEC")]
    dnssec: bool,
    #[tabled(rename = "Last Updated")]
    last_updated: String,
}

fn cdn_row(c: &Cdn) -> CdnRow {
    CdnRow {
        id: c.id.map(|id| id.get().to_string()).unwrap_or_default(),
        name: c.name.clone(),
        domain: c.domain_name.clone(),
        dnssec: c.dnssec_enabled,
        last_updated: c.last_updated.clone().unwrap_or_default(),
    }
}

fn detail(c: &Cdn) -> String {
    [
        format!("ID:           {}", c.id.map(|id| id.get().to_string()).unwrap_or_default()),
        format!("Name:         {}", c.name),
        format!("Domain:       {}", c.domain_name),
        format!("DNSSEC:       {}", c.dnssec_enabled),
        format!("Last Updated: {}", c.last_updated.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

pub async fn handle(session: &Session, args: CdnsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let portal = &session.portal;
    match args.command {
        CdnsCommand::List => {
            let cdns = portal.get_cdns().await?;
            let out = output::render_list(&global.output, &cdns, cdn_row, |c| c.name.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CdnsCommand::Create {
            name,
            domain,
            dnssec,
        } => {
            let cdn = Cdn {
                dnssec_enabled: dnssec,
                ..Cdn::new(name, domain)
            };
            let form = NewCdnForm::new(cdn, Arc::clone(portal), Arc::clone(&session.navigator));
            form.base().validate()?;

            let stored = form.save(form.base().cdn()).await?;
            output::notice(&format!("CDN '{}' created", stored.name), global.quiet);
            let out = output::render_single(&global.output, &stored, detail, |c| c.name.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CdnsCommand::Update {
            id,
            name,
            domain,
            dnssec,
        } => {
            let id = util::parse_id("id", &id)?;
            let cdn = portal.get_cdn(id).await?;
            let mut form = EditCdnForm::new(
                cdn,
                Arc::clone(portal),
                Arc::new(TerminalDialogs::new(global.yes, None)),
                Arc::clone(&session.navigator),
            );

            let draft = form.base_mut().cdn_mut();
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(domain) = domain {
                draft.domain_name = domain;
            }
            if let Some(dnssec) = dnssec {
                draft.dnssec_enabled = dnssec;
            }
            form.base().validate()?;

            let draft = form.base().cdn().clone();
            let stored = form.save(&draft).await?;
            output::notice(&format!("CDN '{}' updated", form.cdn_name()), global.quiet);
            let out = output::render_single(&global.output, &stored, detail, |c| c.name.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CdnsCommand::Delete { id } => {
            let id = util::parse_id("id", &id)?;
            util::ensure_answerable(global.yes, "cdns delete")?;
            let cdn = portal.get_cdn(id).await?;
            let mut form = EditCdnForm::new(
                cdn.clone(),
                Arc::clone(portal),
                Arc::new(TerminalDialogs::new(global.yes, None)),
                Arc::clone(&session.navigator),
            );

            match form.confirm_delete(&cdn).await? {
                DialogOutcome::Confirmed(()) => {
                    output::notice(&format!("CDN '{}' deleted", cdn.name), global.quiet);
                }
                DialogOutcome::Cancelled => output::notice("Cancelled", global.quiet),
            }
            Ok(())
        }
    }
}
