//! Clap derive structures for the `tportal` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// tportal -- Traffic Portal from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "tportal",
    version,
    about = "Administer a Traffic Ops CDN from the command line",
    long_about = "Manage CDNs, queue or clear server updates, and inspect\n\
        delivery services through the Traffic Ops API.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Traffic Ops profile to use
    #[arg(long, short = 'p', env = "TPORTAL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Traffic Ops URL (overrides profile)
    #[arg(long, env = "TPORTAL_URL", global = true)]
    pub url: Option<String>,

    /// Login name (overrides profile)
    #[arg(long, short = 'u', env = "TPORTAL_USERNAME", global = true, hide_env = true)]
    pub username: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "TPORTAL_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "TPORTAL_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "TPORTAL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage CDNs
    Cdns(CdnsArgs),

    /// List servers and queue or clear their updates
    #[command(alias = "srv")]
    Servers(ServersArgs),

    /// Inspect delivery services
    #[command(name = "ds", alias = "delivery-services")]
    DeliveryServices(DsArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── CDNs ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CdnsArgs {
    #[command(subcommand)]
    pub command: CdnsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CdnsCommand {
    /// List all CDNs
    #[command(alias = "ls")]
    List,

    /// Create a CDN
    Create {
        /// CDN name (letters, digits, '-', '_' and '.')
        name: String,

        /// DNS domain served by the CDN
        #[arg(long, short = 'd')]
        domain: String,

        /// Enable DNSSEC
        #[arg(long)]
        dnssec: bool,
    },

    /// Update a CDN
    Update {
        /// CDN id
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New domain name
        #[arg(long, short = 'd')]
        domain: Option<String>,

        /// Enable or disable DNSSEC
        #[arg(long)]
        dnssec: Option<bool>,
    },

    /// Delete a CDN (asks for confirmation)
    #[command(alias = "rm")]
    Delete {
        /// CDN id
        id: String,
    },
}

// ── Servers ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ServersArgs {
    #[command(subcommand)]
    pub command: ServersCommand,
}

/// Restrict a server command to one cache group.
#[derive(Debug, Clone, Args)]
pub struct CacheGroupScope {
    /// Cache group id
    #[arg(long, short = 'g')]
    pub cache_group: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Rows per page
    #[arg(long, default_value = "25")]
    pub page_size: PageSizeArg,

    /// Page number, starting at 1
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Sort by column (header name, e.g. "Host")
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PageSizeArg {
    #[value(name = "25")]
    P25,
    #[value(name = "50")]
    P50,
    #[value(name = "100")]
    P100,
    All,
}

#[derive(Debug, Subcommand)]
pub enum ServersCommand {
    /// List servers
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        scope: CacheGroupScope,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show the portal link for editing a server
    Edit {
        /// Server id
        id: String,
    },

    /// Show the portal link for creating a server
    New,

    /// Queue updates on every server of a CDN
    QueueUpdates {
        #[command(flatten)]
        scope: CacheGroupScope,

        /// CDN name; prompts when omitted
        #[arg(long)]
        cdn: Option<String>,
    },

    /// Clear queued updates on every server of a CDN
    ClearUpdates {
        #[command(flatten)]
        scope: CacheGroupScope,

        /// CDN name; prompts when omitted
        #[arg(long)]
        cdn: Option<String>,
    },

    /// Open an ssh session link for a server
    Ssh {
        /// Server id
        id: String,
    },

    /// Open a server's astats monitor page
    Monitor {
        /// Server id
        id: String,
    },

    /// Open a server's charts
    Charts {
        /// Server id
        id: String,
    },
}

// ── Delivery services ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DsArgs {
    #[command(subcommand)]
    pub command: DsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DsCommand {
    /// List delivery services
    #[command(alias = "ls")]
    List,

    /// Open a delivery service's charts
    Charts {
        /// Delivery service id
        id: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Set a field on the active profile
    Set {
        /// One of: url, portal_url, username, password_env, ca_cert, insecure, timeout
        key: String,
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Make a profile the default
    Use {
        /// Profile name
        name: String,
    },

    /// Store a profile password in the system keyring
    SetPassword,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
