//! CLI argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bingwall")]
#[command(about = "Daily Bing wallpaper for the desktop", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch today's image now and set it as the desktop background.
    Refresh,

    /// Run in the foreground, refreshing once at start and then daily.
    Daemon,

    /// Show the outcome of the last refresh (needs a running daemon).
    Status,

    /// Show, set, or clear the custom metadata-API URL.
    SetApi {
        /// URL of a JSON API returning {"imageUrl": "..."}. Omit to show
        /// the current value.
        url: Option<String>,

        /// Go back to the built-in provider.
        #[arg(long, conflicts_with = "url")]
        clear: bool,
    },
}
