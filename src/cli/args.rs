//! CLI argument definitions using clap
//!
//! Commands:
//! - trivia init [--config <path>] [--database-url <url>] [--seed]
//! - trivia start [--config <path>] [--database-url <url>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trivia - REST API for a trivia game
#[derive(Parser, Debug)]
#[command(name = "trivia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database tables, optionally filling them with sample data
    Init {
        /// Path to JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured database URL
        #[arg(long)]
        database_url: Option<String>,

        /// Insert the standard categories and sample questions into an empty database
        #[arg(long)]
        seed: bool,
    },

    /// Start the HTTP server
    Start {
        /// Path to JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured database URL
        #[arg(long)]
        database_url: Option<String>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
