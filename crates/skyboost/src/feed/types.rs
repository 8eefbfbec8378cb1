//! Feed view models returned by getAuthorFeed.
//!
//! Posts are immutable snapshots as seen by the authenticated viewer; the
//! bot never mutates them locally.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::Did;

/// One page of an account's authored feed.
#[derive(Debug, Clone)]
pub struct AuthorFeedPage {
    /// Feed entries, newest-first as fetched.
    pub items: Vec<FeedViewPost>,
    /// Opaque continuation cursor; absent or empty on the last page.
    pub cursor: Option<String>,
}

/// A single entry of the authored feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedViewPost {
    pub post: PostView,
}

/// Snapshot of a post as seen by the authenticated viewer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    /// Remote post reference (AT URI).
    pub uri: String,
    /// Content-addressed identifier.
    pub cid: String,
    pub author: AuthorView,
    pub indexed_at: DateTime<Utc>,
    #[serde(default)]
    pub viewer: Option<ViewerState>,
}

impl PostView {
    /// Whether the authenticated viewer has already liked this post.
    pub fn liked(&self) -> bool {
        self.viewer.as_ref().is_some_and(|v| v.like.is_some())
    }

    /// Whether the authenticated viewer has already reposted this post.
    pub fn reposted(&self) -> bool {
        self.viewer.as_ref().is_some_and(|v| v.repost.is_some())
    }

    /// Both actions already exist for the viewer.
    pub fn fully_actioned(&self) -> bool {
        self.liked() && self.reposted()
    }
}

/// The post's author as rendered in the feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub did: Did,
    pub handle: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Per-viewer annotations on a post.
///
/// `like` and `repost` hold the AT URIs of the viewer's existing records
/// when the corresponding action has already been taken.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewerState {
    #[serde(default)]
    pub like: Option<String>,
    #[serde(default)]
    pub repost: Option<String>,
}
