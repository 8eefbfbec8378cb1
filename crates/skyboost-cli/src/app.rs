//! The linear run pipeline: authenticate, collect, filter, engage.

use anyhow::{Context, Result};
use tracing::info;

use skyboost::Session;
use skyboost::actions::{self, EngageReport};
use skyboost::feed::{self, Collector};

use crate::config::Config;

/// What a completed run did.
#[derive(Debug)]
pub enum RunOutcome {
    /// One eligible post was found and engaged (or logged, in dry-run mode).
    Engaged { post: String, report: EngageReport },
    /// The collected window held no unactioned post.
    NothingToDo,
}

/// Execute one full run against the configured PDS.
///
/// Authentication failure is fatal; everything downstream degrades
/// gracefully (partial collection, per-action failure logging) and still
/// completes the run.
pub async fn run(config: &Config, dry_run: bool) -> Result<RunOutcome> {
    let session = Session::login(&config.pds, config.credentials.clone())
        .await
        .context("authentication failed")?;

    info!(handle = session.handle(), did = %session.did(), "authenticated");
    info!(target = %config.target, "collecting authored posts back to the fully actioned boundary");

    let posts = Collector::default().collect(&session, &config.target).await;

    let Some(post) = feed::oldest_unactioned(posts) else {
        info!("no unactioned posts in the collected window");
        return Ok(RunOutcome::NothingToDo);
    };

    info!(
        uri = %post.uri,
        author = post.author.display_name.as_deref().unwrap_or(&post.author.handle),
        liked = post.liked(),
        reposted = post.reposted(),
        "found oldest unactioned post"
    );

    let report = actions::engage(&session, &post, dry_run).await;

    Ok(RunOutcome::Engaged {
        post: post.uri,
        report,
    })
}
