//! Delivery service command handlers.

use std::sync::Arc;

use tabled::Tabled;

use tportal_core::{DeliveryService, DeliveryServiceUtils, Protocol, QueryStringHandling};

use crate::cli::{DsArgs, DsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::{Session, util};

#[derive(Tabled)]
struct DsRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "XML ID")]
    xml_id: String,
    #[tabled(rename = "Display Name")]
    display_name: String,
    #[tabled(rename = "CDN")]
    cdn: String,
    #[tabled(rename = "Protocol")]
    protocol: &'static str,
    #[tabled(rename = "Query String")]
    qstring: &'static str,
    #[tabled(rename = "Active")]
    active: bool,
}

fn ds_row(ds: &DeliveryService) -> DsRow {
    DsRow {
        id: ds.id.to_string(),
        xml_id: ds.xml_id.clone(),
        display_name: ds.display_name.clone().unwrap_or_default(),
        cdn: ds.cdn_name.clone().unwrap_or_default(),
        protocol: ds.protocol().map_or("-", Protocol::label),
        qstring: ds.query_string_handling().map_or("-", QueryStringHandling::label),
        active: ds.active,
    }
}

pub async fn handle(session: &Session, args: DsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        DsCommand::List => {
            let services = session.portal.get_delivery_services().await?;
            let out =
                output::render_list(&global.output, &services, ds_row, |ds| ds.xml_id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DsCommand::Charts { id } => {
            if session.properties.delivery_services.charts.base_url.is_empty() {
                return Err(CliError::Validation {
                    field: "properties.delivery_services.charts.base_url".into(),
                    reason: "no chart URL configured".into(),
                });
            }
            let id = util::parse_id("id", &id)?;
            let ds = session.portal.get_delivery_service(id).await?;
            DeliveryServiceUtils::new(Arc::clone(&session.navigator), &session.properties)
                .open_charts(&ds, None);
            Ok(())
        }
    }
}
