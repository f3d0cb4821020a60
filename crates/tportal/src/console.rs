//! Terminal hosts for the controller collaborators.
//!
//! [`TerminalDialogs`] answers dialogs with `dialoguer` prompts;
//! [`ConsoleNavigator`] turns routing and window requests into printed
//! portal links, and records reload requests so the command can re-fetch.

use std::fmt;
use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};

use dialoguer::{Confirm, Select};
use tracing::{debug, warn};

use tportal_core::{DialogOutcome, DialogRequest, Dialogs, Navigator, WindowTarget};

/// Dialog host backed by terminal prompts.
pub struct TerminalDialogs {
    assume_yes: bool,
    /// Choice label picked without prompting.
    preselect: Option<String>,
}

impl TerminalDialogs {
    pub fn new(assume_yes: bool, preselect: Option<String>) -> Self {
        Self {
            assume_yes,
            preselect,
        }
    }

    /// Whether a prompt could be shown at all.
    pub fn interactive() -> bool {
        io::stdin().is_terminal() && io::stderr().is_terminal()
    }
}

impl Dialogs for TerminalDialogs {
    async fn confirm(&self, request: &DialogRequest) -> DialogOutcome<()> {
        if self.assume_yes {
            debug!(title = %request.params.title, "auto-confirmed (--yes)");
            return DialogOutcome::Confirmed(());
        }
        eprintln!("{}", request.params.title);
        let answer = Confirm::new()
            .with_prompt(request.params.message.as_str())
            .default(false)
            .interact_opt();
        match answer {
            Ok(Some(true)) => DialogOutcome::Confirmed(()),
            Ok(_) => DialogOutcome::Cancelled,
            Err(e) => {
                warn!(error = %e, "confirmation prompt failed; treating as cancelled");
                DialogOutcome::Cancelled
            }
        }
    }

    async fn select<T>(&self, request: &DialogRequest, choices: Vec<T>) -> DialogOutcome<T>
    where
        T: fmt::Display + Send,
    {
        if let Some(wanted) = &self.preselect {
            let picked = choices.into_iter().find(|c| c.to_string() == *wanted);
            if picked.is_none() {
                warn!(choice = %wanted, "no such choice");
            }
            return picked.map_or(DialogOutcome::Cancelled, DialogOutcome::Confirmed);
        }
        if choices.is_empty() {
            warn!(title = %request.params.title, "nothing to select from");
            return DialogOutcome::Cancelled;
        }

        let labels: Vec<String> = choices.iter().map(ToString::to_string).collect();
        let answer = Select::new()
            .with_prompt(format!("{}: {}", request.params.title, request.params.message))
            .items(&labels)
            .default(0)
            .interact_opt();
        match answer {
            Ok(Some(index)) => choices
                .into_iter()
                .nth(index)
                .map_or(DialogOutcome::Cancelled, DialogOutcome::Confirmed),
            Ok(None) => DialogOutcome::Cancelled,
            Err(e) => {
                warn!(error = %e, "selection prompt failed; treating as cancelled");
                DialogOutcome::Cancelled
            }
        }
    }
}

/// Navigator that prints links instead of routing a browser.
pub struct ConsoleNavigator {
    /// Traffic Portal base URL; links are bare paths without it.
    portal_url: Option<String>,
    reload_requested: AtomicBool,
}

impl ConsoleNavigator {
    pub fn new(portal_url: Option<String>) -> Self {
        Self {
            portal_url: portal_url.map(|u| u.trim_end_matches('/').to_owned()),
            reload_requested: AtomicBool::new(false),
        }
    }

    /// Portal link for a console route.
    pub fn link(&self, path: &str) -> String {
        match &self.portal_url {
            Some(base) => format!("{base}/#!{path}"),
            None => path.to_owned(),
        }
    }

    /// Consume a pending reload request.
    pub fn take_reload(&self) -> bool {
        self.reload_requested.swap(false, Ordering::AcqRel)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate_to_path(&self, path: &str) {
        println!("{}", self.link(path));
    }

    fn reload(&self) {
        debug!("reload requested");
        self.reload_requested.store(true, Ordering::Release);
    }

    fn scroll_to_top(&self) {}

    fn open(&self, url: &str, target: WindowTarget) {
        debug!(url, ?target, "open");
        println!("{url}");
    }
}
