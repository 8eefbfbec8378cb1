//! skyboost - single-run Bluesky engagement bot.
//!
//! Reads credentials and the target account from the environment, walks the
//! target's authored feed to find the oldest post the authenticated account
//! has not yet liked and reposted, actions that one post, and exits.

mod app;
mod cli;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use app::RunOutcome;
use cli::Cli;
use config::{Config, EnvStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    // Missing or malformed configuration is fatal before any network call.
    let config = Config::load(&EnvStore, &cli.pds)?;

    if cli.dry_run {
        info!("dry run mode: no likes or reposts will be performed");
    }

    match app::run(&config, cli.dry_run).await? {
        RunOutcome::Engaged { post, report } => {
            output::success("actioned one post");
            output::field("post", &post);
            output::field("like", &output::describe(&report.like));
            output::field("repost", &output::describe(&report.repost));
        }
        RunOutcome::NothingToDo => {
            output::success("no unactioned posts found; nothing to do");
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
