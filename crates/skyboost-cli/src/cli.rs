//! CLI argument definitions.

use clap::Parser;

/// Like and repost the oldest unactioned post from a Bluesky account.
#[derive(Parser, Debug)]
#[command(name = "skyboost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log intended actions without performing any writes
    #[arg(long)]
    pub dry_run: bool,

    /// PDS base URL
    #[arg(long, default_value = "https://bsky.social")]
    pub pds: String,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}
