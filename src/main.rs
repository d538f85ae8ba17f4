//! CLI entry point for storefront.

mod app;
mod cli;

use app::commands::chat::handle_chat_command;
use app::commands::init::handle_init_command;
use app::commands::theme::handle_theme_command;
use app::commands::ticket::handle_ticket_command;
use clap::Parser;
use cli::Command;
use storefront::config::load_config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "storefront=info,tower_http=info";

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();

    // `init` must work before any config file exists.
    if let Command::Init { force } = &args.command {
        if let Err(e) = handle_init_command(args.config.as_deref(), *force) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let outcome = match args.command {
        Command::Theme(theme_args) => {
            handle_theme_command(&config, &theme_args).map_err(|e| e.to_string())
        }
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            storefront::server::serve(&config)
                .await
                .map_err(|e| format!("relay server failed: {e}"))
        }
        Command::Ticket(ticket_args) => handle_ticket_command(&config, ticket_args)
            .await
            .map_err(|e| e.to_string()),
        Command::Chat { message } => {
            handle_chat_command(&message).await;
            Ok(())
        }
        Command::Init { .. } => Ok(()),
    };

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Stderr logging; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
