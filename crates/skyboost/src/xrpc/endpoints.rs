//! XRPC endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use crate::feed::types::FeedViewPost;

/// com.atproto.server.createSession
pub const CREATE_SESSION: &str = "com.atproto.server.createSession";

/// app.bsky.feed.getAuthorFeed
pub const GET_AUTHOR_FEED: &str = "app.bsky.feed.getAuthorFeed";

/// com.atproto.repo.createRecord
pub const CREATE_RECORD: &str = "com.atproto.repo.createRecord";

/// Request body for createSession.
#[derive(Serialize)]
pub struct CreateSessionRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

// The password never appears in Debug output.
impl std::fmt::Debug for CreateSessionRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateSessionRequest")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response from createSession.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub did: String,
    pub handle: String,
    pub access_jwt: String,
    pub refresh_jwt: String,
}

/// Query parameters for getAuthorFeed.
#[derive(Debug, Serialize)]
pub struct GetAuthorFeedQuery<'a> {
    pub actor: &'a str,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
}

/// Response from getAuthorFeed.
#[derive(Debug, Deserialize)]
pub struct GetAuthorFeedResponse {
    pub feed: Vec<FeedViewPost>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Request body for createRecord.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest<'a, R: Serialize> {
    pub repo: &'a str,
    pub collection: &'a str,
    pub record: &'a R,
}

/// Response from createRecord.
#[derive(Debug, Deserialize)]
pub struct CreateRecordResponse {
    pub uri: String,
    pub cid: String,
}

/// XRPC error response format.
#[derive(Debug, Deserialize)]
pub struct XrpcErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}
