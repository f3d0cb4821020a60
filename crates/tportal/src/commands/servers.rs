//! Server command handlers.

use std::sync::Arc;

use tabled::builder::Builder;
use tabled::settings::Style;

use tportal_core::table::{GridRow, ServerRows, SortOrder};
use tportal_core::utils;
use tportal_core::{
    BulkAction, CacheGroupServersTable, Cdn, CoreError, DialogOutcome, EntityId, Grid, PageSize,
    Portal, Server, ServersTable,
};

use crate::cli::{CacheGroupScope, GlobalOpts, PageArgs, PageSizeArg, ServersArgs, ServersCommand};
use crate::console::{ConsoleNavigator, TerminalDialogs};
use crate::error::CliError;
use crate::output;

use super::{Session, util};

type AllServers = ServersTable<Portal, TerminalDialogs, ConsoleNavigator>;
type GroupServers = CacheGroupServersTable<Portal, TerminalDialogs, ConsoleNavigator>;

/// The resolved server view: every server, or one cache group's.
enum ServerView {
    All(AllServers),
    CacheGroup(GroupServers),
}

impl ServerView {
    async fn load(
        session: &Session,
        scope: &CacheGroupScope,
        dialogs: TerminalDialogs,
    ) -> Result<Self, CliError> {
        let portal = &session.portal;
        let dialogs = Arc::new(dialogs);
        let server_utils = session.server_utils();
        let nav = Arc::clone(&session.navigator);

        let view = match &scope.cache_group {
            Some(raw) => {
                let id = util::parse_id("cache-group", raw)?;
                let group = portal.get_cache_group(id).await?;
                let servers = portal.get_cache_group_servers(id).await?;
                Self::CacheGroup(CacheGroupServersTable::new(
                    group,
                    servers,
                    Arc::clone(portal),
                    dialogs,
                    server_utils,
                    nav,
                    &session.properties,
                ))
            }
            None => {
                let servers = portal.get_servers().await?;
                Self::All(ServersTable::new(
                    servers,
                    Arc::clone(portal),
                    dialogs,
                    server_utils,
                    nav,
                    &session.properties,
                ))
            }
        };
        Ok(view)
    }

    fn rows(&self) -> &ServerRows<ConsoleNavigator> {
        match self {
            Self::All(table) => table.rows(),
            Self::CacheGroup(table) => table.rows(),
        }
    }

    fn rows_mut(&mut self) -> &mut ServerRows<ConsoleNavigator> {
        match self {
            Self::All(table) => table.rows_mut(),
            Self::CacheGroup(table) => table.rows_mut(),
        }
    }

    async fn bulk(&mut self, action: BulkAction) -> Result<DialogOutcome<Cdn>, CoreError> {
        match (self, action) {
            (Self::All(t), BulkAction::Queue) => t.confirm_queue_server_updates().await,
            (Self::All(t), BulkAction::Clear) => t.confirm_clear_server_updates().await,
            (Self::CacheGroup(t), BulkAction::Queue) => t.confirm_queue_server_updates().await,
            (Self::CacheGroup(t), BulkAction::Clear) => t.confirm_clear_server_updates().await,
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────────

fn apply_paging(grid: &mut Grid<Server>, page: &PageArgs) -> Result<(), CliError> {
    if let Some(column) = &page.sort {
        let index = grid
            .columns()
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
            .ok_or_else(|| CliError::Validation {
                field: "sort".into(),
                reason: format!("unknown column '{column}'"),
            })?;
        let order = if page.desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        grid.sort_by(index, order)?;
    }

    let size = match page.page_size {
        PageSizeArg::P25 => PageSize::Rows(25),
        PageSizeArg::P50 => PageSize::Rows(50),
        PageSizeArg::P100 => PageSize::Rows(100),
        PageSizeArg::All => PageSize::All,
    };
    grid.set_page_size(size)?;
    grid.set_page(page.page.saturating_sub(1));
    Ok(())
}

fn server_table(servers: &[Server], color: bool) -> String {
    // The trailing actions column has no terminal counterpart.
    let columns = &Server::COLUMNS[..Server::COLUMNS.len() - 1];
    let mut builder = Builder::default();
    builder.push_record(columns.iter().copied());
    for server in servers {
        let offline = utils::is_offline(&server.status);
        builder.push_record((0..columns.len()).map(|c| match c {
            4 if offline => output::status_cell(
                &format!(
                    "{} ({})",
                    server.status,
                    utils::offline_reason(server)
                ),
                true,
                color,
            ),
            4 => output::status_cell(&server.status, false, color),
            _ => server.cell(c),
        }));
    }
    builder.build().with(Style::rounded()).to_string()
}

fn print_rows(rows: &ServerRows<ConsoleNavigator>, global: &GlobalOpts) -> Result<(), CliError> {
    let grid = rows.grid();
    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &grid.visible(),
        |servers| server_table(servers, color),
        |servers| {
            servers
                .iter()
                .map(|s| s.host_name.clone())
                .collect::<Vec<_>>()
                .join("\n")
        },
    )?;
    output::print_output(&out, global.quiet);
    output::notice(
        &format!(
            "page {}/{} ({} servers, {} per page)",
            grid.page() + 1,
            grid.page_count(),
            grid.len(),
            grid.page_size()
        ),
        global.quiet,
    );
    Ok(())
}

fn find_server(rows: &ServerRows<ConsoleNavigator>, id: EntityId) -> Result<&Server, CliError> {
    rows.servers()
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| CliError::NotFound {
            resource_type: "server".into(),
            identifier: id.to_string(),
            list_command: "servers list".into(),
        })
}

// ── Handler ──────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: ServersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let unscoped = CacheGroupScope { cache_group: None };
    match args.command {
        ServersCommand::List { scope, page } => {
            let mut view = ServerView::load(session, &scope, no_prompt(global)).await?;
            apply_paging(view.rows_mut().grid_mut(), &page)?;
            print_rows(view.rows(), global)
        }

        ServersCommand::Edit { id } => {
            let id = util::parse_id("id", &id)?;
            let view = ServerView::load(session, &unscoped, no_prompt(global)).await?;
            find_server(view.rows(), id)?;
            view.rows().edit_server(id);
            Ok(())
        }

        ServersCommand::New => {
            // The new-server route needs no rows.
            let table: AllServers = ServersTable::new(
                Vec::new(),
                Arc::clone(&session.portal),
                Arc::new(no_prompt(global)),
                session.server_utils(),
                Arc::clone(&session.navigator),
                &session.properties,
            );
            table.create_server();
            Ok(())
        }

        ServersCommand::QueueUpdates { scope, cdn } => {
            bulk(session, global, &scope, cdn, BulkAction::Queue).await
        }

        ServersCommand::ClearUpdates { scope, cdn } => {
            bulk(session, global, &scope, cdn, BulkAction::Clear).await
        }

        ServersCommand::Ssh { id } => {
            let id = util::parse_id("id", &id)?;
            let view = ServerView::load(session, &unscoped, no_prompt(global)).await?;
            let server = find_server(view.rows(), id)?;
            let ip = server.ip_address.as_deref().ok_or_else(|| CliError::Validation {
                field: "id".into(),
                reason: format!("server {} has no IPv4 address", server.host_name),
            })?;
            view.rows().server_utils().ssh(ip, None);
            Ok(())
        }

        ServersCommand::Monitor { id } => {
            let id = util::parse_id("id", &id)?;
            let view = ServerView::load(session, &unscoped, no_prompt(global)).await?;
            let server = find_server(view.rows(), id)?;
            view.rows().server_utils().goto_monitor(server, None);
            Ok(())
        }

        ServersCommand::Charts { id } => {
            let id = util::parse_id("id", &id)?;
            let view = ServerView::load(session, &unscoped, no_prompt(global)).await?;
            if !view.rows().show_charts_button() {
                return Err(CliError::Validation {
                    field: "properties.servers.charts.show".into(),
                    reason: "server charts are disabled".into(),
                });
            }
            let server = find_server(view.rows(), id)?;
            view.rows().server_utils().open_charts(server, None);
            Ok(())
        }
    }
}

fn no_prompt(global: &GlobalOpts) -> TerminalDialogs {
    TerminalDialogs::new(global.yes, None)
}

async fn bulk(
    session: &Session,
    global: &GlobalOpts,
    scope: &CacheGroupScope,
    cdn: Option<String>,
    action: BulkAction,
) -> Result<(), CliError> {
    util::ensure_answerable(cdn.is_some(), "servers queue-updates/clear-updates")?;
    let dialogs = TerminalDialogs::new(global.yes, cdn.clone());
    let mut view = ServerView::load(session, scope, dialogs).await?;

    match view.bulk(action).await? {
        DialogOutcome::Confirmed(cdn) => {
            let verb = match action {
                BulkAction::Queue => "Queued",
                BulkAction::Clear => "Cleared",
            };
            output::notice(
                &format!("{verb} server updates on CDN '{}'", cdn.name),
                global.quiet,
            );
        }
        DialogOutcome::Cancelled => {
            unmatched_cdn(cdn)?;
            output::notice("Cancelled", global.quiet);
            return Ok(());
        }
    }

    if session.navigator.take_reload() {
        let view = ServerView::load(session, scope, no_prompt(global)).await?;
        print_rows(view.rows(), global)?;
    }
    Ok(())
}

/// A `--cdn` answer only cancels the selection when it names no CDN.
fn unmatched_cdn(preselected: Option<String>) -> Result<(), CliError> {
    match preselected {
        Some(name) => Err(CliError::NotFound {
            resource_type: "cdn".into(),
            identifier: name,
            list_command: "cdns list".into(),
        }),
        None => Ok(()),
    }
}
