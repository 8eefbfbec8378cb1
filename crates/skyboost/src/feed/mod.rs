//! Author-feed collection and eligibility filtering.

pub mod types;

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::auth::Session;
use crate::types::Did;

pub use types::{AuthorFeedPage, AuthorView, FeedViewPost, PostView, ViewerState};

/// Posts requested per getAuthorFeed page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Courtesy delay between successive page fetches.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(1);

/// Paginates an account's authored feed, newest-first, collecting posts up
/// to the first one the viewer has already liked and reposted.
#[derive(Debug, Clone)]
pub struct Collector {
    page_size: u32,
    page_delay: Duration,
}

impl Default for Collector {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }
}

impl Collector {
    /// Create a collector with a custom page size and inter-page delay.
    pub fn new(page_size: u32, page_delay: Duration) -> Self {
        Self {
            page_size,
            page_delay,
        }
    }

    /// Collect the target's authored posts, newest-first as fetched.
    ///
    /// Stops at the first target-authored post the viewer has fully
    /// actioned: history older than that boundary is assumed already
    /// processed. Feed entries authored by anyone other than the target
    /// (boosts surfaced in the feed) are skipped. A fetch failure
    /// mid-pagination truncates collection and returns whatever was
    /// gathered so far.
    #[instrument(skip(self, session), fields(%target))]
    pub async fn collect(&self, session: &Session, target: &Did) -> Vec<PostView> {
        let mut collected = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = match session
                .get_author_feed(target, self.page_size, cursor.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!(error = %e, collected = collected.len(), "feed fetch failed, keeping partial results");
                    break;
                }
            };

            if page.items.is_empty() {
                debug!("no more posts to fetch");
                break;
            }

            for item in page.items {
                let post = item.post;

                if post.author.did != *target {
                    debug!(uri = %post.uri, author = %post.author.did, "skipping post not authored by target");
                    continue;
                }

                if post.fully_actioned() {
                    // Everything older than a liked-and-reposted post is
                    // treated as already processed history.
                    info!(uri = %post.uri, "reached fully actioned post, stopping collection");
                    return collected;
                }

                debug!(uri = %post.uri, indexed_at = %post.indexed_at, "collected post");
                collected.push(post);
            }

            match page.cursor {
                Some(next) if !next.is_empty() => {
                    cursor = Some(next);
                    tokio::time::sleep(self.page_delay).await;
                }
                _ => {
                    debug!("no continuation cursor, stopping");
                    break;
                }
            }
        }

        info!(collected = collected.len(), "finished collecting posts");
        collected
    }
}

/// Returns the oldest post the viewer has not fully actioned.
///
/// Takes the newest-first sequence from [`Collector::collect`], reverses it
/// so processing order is oldest-to-newest, and picks the first post
/// missing a like or a repost. `None` when the window holds no such post.
pub fn oldest_unactioned(mut posts: Vec<PostView>) -> Option<PostView> {
    posts.reverse();
    posts
        .into_iter()
        .find(|post| !post.liked() || !post.reposted())
}
