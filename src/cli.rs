//! CLI definitions for playscrape.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// playscrape CLI.
#[derive(Parser)]
#[command(name = "playscrape")]
#[command(about = "Scrape video playlists into view-count data")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the HTTP server in foreground (default)
    Serve {
        /// Server host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Scrape one playlist and print the result as JSON
    Scrape {
        /// Playlist URL
        url: String,

        /// Write the JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract videos from a saved page without a browser
    Extract {
        /// Saved HTML page, or a JSON array of list item outerHTML strings
        snapshot: PathBuf,

        /// Write the JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
