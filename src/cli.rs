use clap::{Parser, Subcommand};
use url::Url;

/// Smoke client for the Burrow backend: sign in and poke the main
/// endpoints from a terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Backend base URL, e.g. https://api.burrow.example/
    #[arg(short = 'u', long)]
    pub base_url: Url,

    /// Account email
    #[arg(short = 'e', long)]
    pub email: String,

    /// Account password (prefer BURROW_PASSWORD in scripts)
    #[arg(short = 'p', long, env = "BURROW_PASSWORD")]
    pub password: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Fetch and print the home feed
    Feed {
        /// Restrict to one community
        #[arg(long)]
        community: Option<String>,
    },
    /// Print the signed-in user's profile
    Me,
    /// List communities
    Communities,
    /// List chat conversations
    Conversations,
}
