//! Housie ticket service - HTTP boundary and CLI.

#![warn(missing_docs)]

mod cli;
mod server;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host } => {
            init_tracing();
            let port = resolve_port(port)?;
            info!(%host, port, "Starting Housie ticket server");
            server::serve(host, port).await
        }
        Command::Generate { cards, pretty } => {
            let response = server::CardsResponse {
                cards: housie_tickets::generate_cards(cards),
            };
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{json}");
            Ok(())
        }
    }
}

/// Port precedence: flag, then the PORT environment variable, then 5000.
fn resolve_port(flag: Option<u16>) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }
    match std::env::var("PORT") {
        Ok(raw) => {
            let port = raw.parse()?;
            Ok(port)
        }
        Err(_) => Ok(5000),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
