//! Command-line interface for the Housie ticket service.

use clap::{Parser, Subcommand};

/// Housie ticket service - strip generation over HTTP or stdout
#[derive(Parser, Debug)]
#[command(name = "housie_server")]
#[command(about = "Housie/Tambola ticket generation service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP ticket server
    Serve {
        /// Port to bind to; falls back to the PORT environment
        /// variable, then 5000
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Generate cards and print them as JSON
    Generate {
        /// Number of strips to generate (clamped to 1-60)
        #[arg(short, long, default_value = "1")]
        cards: usize,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
