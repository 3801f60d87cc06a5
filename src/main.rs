//! playscrape - playlist scraper
//!
//! Main entry point for the playscrape CLI and server.

mod adapters;
mod cli;
mod cmd_scrape;
mod server;
mod signal;

use clap::Parser;

use crate::adapters::load_config;
use crate::cli::{Cli, Commands};
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with file and console output
    init_tracing()?;

    let cli = Cli::parse();
    let mut config = load_config(&cli.config)?;

    match cli.command {
        None => run_server(config).await,
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(config).await
        }
        Some(Commands::Scrape { url, output }) => cmd_scrape::scrape(config, url, output).await,
        Some(Commands::Extract { snapshot, output }) => {
            cmd_scrape::extract(config, snapshot, output)
        }
    }
}
