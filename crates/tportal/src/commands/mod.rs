//! Command dispatch: bridges CLI args -> controllers -> output formatting.

pub mod cdns;
pub mod config_cmd;
pub mod ds;
pub mod servers;
pub mod util;

use std::sync::Arc;

use tportal_core::{Portal, Properties, ServerUtils};

use crate::cli::{Command, GlobalOpts};
use crate::console::ConsoleNavigator;
use crate::error::CliError;

/// Everything a connected command needs.
pub struct Session {
    pub portal: Arc<Portal>,
    pub navigator: Arc<ConsoleNavigator>,
    pub properties: Properties,
}

impl Session {
    pub fn server_utils(&self) -> ServerUtils<ConsoleNavigator> {
        ServerUtils::new(
            Arc::clone(&self.navigator),
            self.portal.config().credentials.username.clone(),
            &self.properties,
        )
    }
}

/// Dispatch a connected command to its handler.
pub async fn dispatch(cmd: Command, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Cdns(args) => cdns::handle(session, args, global).await,
        Command::Servers(args) => servers::handle(session, args, global).await,
        Command::DeliveryServices(args) => ds::handle(session, args, global).await,
        // Handled before a session exists
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "command does not need a Traffic Ops session".into(),
        )),
    }
}
