//! Like and repost execution against a single post.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::Result;
use crate::auth::{CreatedRecord, Session};
use crate::feed::PostView;
use crate::types::Nsid;

/// Collection for like records.
pub const LIKE_COLLECTION: &str = "app.bsky.feed.like";

/// Collection for repost records.
pub const REPOST_COLLECTION: &str = "app.bsky.feed.repost";

/// Strong reference to the subject post.
#[derive(Debug, Serialize)]
struct SubjectRef<'a> {
    uri: &'a str,
    cid: &'a str,
}

/// Body of a like or repost record; the `$type` matches the collection.
#[derive(Debug, Serialize)]
struct EngagementRecord<'a> {
    #[serde(rename = "$type")]
    record_type: &'a str,
    subject: SubjectRef<'a>,
    #[serde(rename = "createdAt")]
    created_at: String,
}

/// Outcome of a single action attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A record was created in the session account's repository.
    Performed,
    /// Dry-run mode: the action was logged instead of submitted.
    DryRun,
    /// The viewer state already carried this action.
    AlreadyDone,
    /// The write failed; the error was logged and the run continued.
    Failed(String),
}

/// Per-action outcomes for one engaged post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngageReport {
    pub like: ActionOutcome,
    pub repost: ActionOutcome,
}

/// Like and repost the given post, each attempted independently.
///
/// An already-satisfied action is skipped; a failed write never aborts the
/// other action or the run. Called at most once per run, against at most
/// one post.
#[instrument(skip(session, post), fields(uri = %post.uri))]
pub async fn engage(session: &Session, post: &PostView, dry_run: bool) -> EngageReport {
    let like = if post.liked() {
        debug!("already liked, skipping like action");
        ActionOutcome::AlreadyDone
    } else {
        submit(session, post, LIKE_COLLECTION, dry_run).await
    };

    let repost = if post.reposted() {
        debug!("already reposted, skipping repost action");
        ActionOutcome::AlreadyDone
    } else {
        submit(session, post, REPOST_COLLECTION, dry_run).await
    };

    EngageReport { like, repost }
}

async fn submit(
    session: &Session,
    post: &PostView,
    collection: &str,
    dry_run: bool,
) -> ActionOutcome {
    if dry_run {
        info!(uri = %post.uri, collection, "dry run: would create record");
        return ActionOutcome::DryRun;
    }

    match create(session, post, collection).await {
        Ok(created) => {
            info!(uri = %post.uri, record = %created.uri, collection, "record created");
            ActionOutcome::Performed
        }
        Err(e) => {
            error!(uri = %post.uri, collection, error = %e, "failed to create record");
            ActionOutcome::Failed(e.to_string())
        }
    }
}

async fn create(session: &Session, post: &PostView, collection: &str) -> Result<CreatedRecord> {
    let collection = Nsid::new(collection)?;

    let record = EngagementRecord {
        record_type: collection.as_str(),
        subject: SubjectRef {
            uri: &post.uri,
            cid: &post.cid,
        },
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    session.create_record(&collection, &record).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engagement_record_wire_shape() {
        let record = EngagementRecord {
            record_type: LIKE_COLLECTION,
            subject: SubjectRef {
                uri: "at://did:plc:target/app.bsky.feed.post/1",
                cid: "bafy1",
            },
            created_at: "2024-05-01T12:00:00Z".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["$type"], "app.bsky.feed.like");
        assert_eq!(value["subject"]["uri"], "at://did:plc:target/app.bsky.feed.post/1");
        assert_eq!(value["subject"]["cid"], "bafy1");
        assert_eq!(value["createdAt"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn collections_are_valid_nsids() {
        assert!(Nsid::new(LIKE_COLLECTION).is_ok());
        assert!(Nsid::new(REPOST_COLLECTION).is_ok());
    }
}
