//! CLI argument definitions using clap
//!
//! Commands:
//! - newsdesk serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// newsdesk - a REST API serving news articles, comments, topics, and users
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the newsdesk API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./newsdesk.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
