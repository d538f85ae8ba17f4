//! CLI argument parsing via clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use storefront::build_info;
use storefront::theme::Theme;

/// Storefront support tooling: theme preference and support-ticket relay.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./storefront.toml or ~/.config/storefront/storefront.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or change the light/dark theme preference.
    Theme(ThemeArgs),
    /// Run the support-ticket relay server.
    Serve {
        /// Listen address, overriding `[server].bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Submit a support ticket through the relay.
    Ticket(TicketArgs),
    /// Talk to the scripted support chat.
    Chat {
        /// Message to send; words are joined with spaces.
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Write the default config file.
    Init {
        /// Back up and replace an existing config file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, ClapArgs)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: ThemeAction,

    /// Pretend the OS reports this preference instead of querying it.
    #[arg(long = "system-theme", value_parser = parse_theme, global = true)]
    pub system_theme: Option<Theme>,

    /// Run without persistent storage or system signal (prerender context).
    #[arg(long, global = true)]
    pub headless: bool,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ThemeAction {
    /// Print the effective theme.
    Show,
    /// Select a theme explicitly.
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    /// Switch to the opposite theme.
    Toggle,
}

#[derive(Debug, ClapArgs)]
pub struct TicketArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Request type shown to support staff.
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub message: String,
    /// Page the ticket refers to.
    #[arg(long = "page-url", default_value = "http://localhost:3000/support")]
    pub page_url: String,
    /// Relay endpoint, overriding `[client].relay_url`.
    #[arg(long = "relay-url")]
    pub relay_url: Option<String>,
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value.parse::<Theme>().map_err(|e| e.to_string())
}
