//! Mock PDS tests for the skyboost library.
//!
//! These tests use wiremock to simulate a PDS server and exercise login,
//! feed collection, and record creation without network access or real
//! credentials.

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skyboost::actions::LIKE_COLLECTION;
use skyboost::{Collector, Credentials, Did, Error, PdsUrl, Session};

const TARGET_DID: &str = "did:plc:target123";

/// Helper to create a PDS URL from a mock server.
fn mock_pds_url(server: &MockServer) -> PdsUrl {
    PdsUrl::new(&server.uri()).unwrap()
}

/// Mount a successful createSession mock and log in.
async fn login(server: &MockServer) -> Session {
    Mock::given(method("POST"))
        .and(path("/xrpc/com.atproto.server.createSession"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "did": "did:plc:bot123",
            "handle": "bot.test",
            "accessJwt": "test-access-token",
            "refreshJwt": "test-refresh-token"
        })))
        .mount(server)
        .await;

    let pds = mock_pds_url(server);
    Session::login(&pds, Credentials::new("bot.test", "secret123"))
        .await
        .unwrap()
}

/// Build a getAuthorFeed entry for a post authored by `did`.
fn feed_post(rkey: &str, did: &str, liked: bool, reposted: bool) -> Value {
    json!({
        "post": {
            "uri": format!("at://{did}/app.bsky.feed.post/{rkey}"),
            "cid": format!("bafy{rkey}"),
            "author": {"did": did, "handle": "target.test", "displayName": "Target"},
            "indexedAt": "2024-05-01T12:00:00Z",
            "viewer": {
                "like": if liked { json!(format!("at://did:plc:bot123/{LIKE_COLLECTION}/{rkey}")) } else { Value::Null },
                "repost": if reposted { json!(format!("at://did:plc:bot123/app.bsky.feed.repost/{rkey}")) } else { Value::Null }
            }
        }
    })
}

fn target() -> Did {
    Did::new(TARGET_DID).unwrap()
}

/// Collector with no courtesy delay, for fast tests.
fn fast_collector() -> Collector {
    Collector::new(10, Duration::ZERO)
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/xrpc/com.atproto.server.createSession"))
        .and(body_json(json!({
            "identifier": "bot.test",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "did": "did:plc:bot123",
            "handle": "bot.test",
            "accessJwt": "test-access-token",
            "refreshJwt": "test-refresh-token"
        })))
        .mount(&server)
        .await;

    let pds = mock_pds_url(&server);
    let session = Session::login(&pds, Credentials::new("bot.test", "secret123"))
        .await
        .unwrap();

    assert_eq!(session.did().as_str(), "did:plc:bot123");
    assert_eq!(session.handle(), "bot.test");
}

#[tokio::test]
async fn test_login_never_leaks_tokens_in_debug() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    let debug = format!("{:?}", session);
    assert!(!debug.contains("test-access-token"));
    assert!(!debug.contains("test-refresh-token"));

    let refresh = format!("{:?}", session.refresh_token());
    assert!(!refresh.contains("test-refresh-token"));
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/xrpc/com.atproto.server.createSession"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "AuthenticationRequired",
            "message": "Invalid identifier or password"
        })))
        .mount(&server)
        .await;

    let pds = mock_pds_url(&server);
    let result = Session::login(&pds, Credentials::new("bad@user", "wrongpass")).await;

    assert!(matches!(result, Err(Error::Auth(_))));
}

#[tokio::test]
async fn test_login_non_json_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/xrpc/com.atproto.server.createSession"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let pds = mock_pds_url(&server);
    let result = Session::login(&pds, Credentials::new("bot.test", "secret")).await;

    // Should handle non-JSON error gracefully
    let err = result.unwrap_err().to_string();
    assert!(err.contains("500"));
}

// ============================================================================
// Feed Collection Tests
// ============================================================================

#[tokio::test]
async fn test_collect_single_page() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .and(query_param("actor", TARGET_DID))
        .and(query_param("limit", "10"))
        .and(header("authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [
                feed_post("p2", TARGET_DID, false, false),
                feed_post("p1", TARGET_DID, true, false)
            ]
        })))
        .mount(&server)
        .await;

    let posts = fast_collector().collect(&session, &target()).await;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].uri, format!("at://{TARGET_DID}/app.bsky.feed.post/p2"));
    assert!(posts[1].liked());
}

#[tokio::test]
async fn test_collect_stops_at_fully_actioned_post() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    // A second page must never be requested once the boundary is hit.
    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .and(query_param("cursor", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"feed": []})))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [
                feed_post("p1", TARGET_DID, false, false),
                feed_post("p2", TARGET_DID, false, true),
                feed_post("p3", TARGET_DID, true, true),
                feed_post("p4", TARGET_DID, false, false)
            ],
            "cursor": "page-2"
        })))
        .mount(&server)
        .await;

    let posts = fast_collector().collect(&session, &target()).await;

    // Exactly the posts newer than the fully actioned boundary.
    let rkeys: Vec<&str> = posts.iter().map(|p| p.uri.rsplit('/').next().unwrap()).collect();
    assert_eq!(rkeys, ["p1", "p2"]);
}

#[tokio::test]
async fn test_collect_skips_posts_not_authored_by_target() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [
                feed_post("p1", TARGET_DID, false, false),
                feed_post("boosted", "did:plc:someoneelse", false, false),
                feed_post("p2", TARGET_DID, false, false)
            ]
        })))
        .mount(&server)
        .await;

    let posts = fast_collector().collect(&session, &target()).await;

    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.author.did == target()));
}

#[tokio::test]
async fn test_collect_follows_continuation_cursor() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    // Mounted first so the cursor-bearing request matches it.
    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .and(query_param("cursor", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [feed_post("p2", TARGET_DID, false, false)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [feed_post("p1", TARGET_DID, false, false)],
            "cursor": "page-2"
        })))
        .mount(&server)
        .await;

    let posts = fast_collector().collect(&session, &target()).await;

    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn test_collect_keeps_partial_results_on_fetch_error() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .and(query_param("cursor", "page-2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "InternalServerError",
            "message": "feed unavailable"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [
                feed_post("p1", TARGET_DID, false, false),
                feed_post("p2", TARGET_DID, false, true)
            ],
            "cursor": "page-2"
        })))
        .mount(&server)
        .await;

    let posts = fast_collector().collect(&session, &target()).await;

    // Pagination failure truncates collection instead of aborting.
    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn test_collect_empty_feed() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"feed": []})))
        .mount(&server)
        .await;

    let posts = fast_collector().collect(&session, &target()).await;

    assert!(posts.is_empty());
}

// ============================================================================
// Record Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_like_record() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    Mock::given(method("POST"))
        .and(path("/xrpc/com.atproto.repo.createRecord"))
        .and(header("authorization", "Bearer test-access-token"))
        .and(body_partial_json(json!({
            "repo": "did:plc:bot123",
            "collection": "app.bsky.feed.like",
            "record": {
                "$type": "app.bsky.feed.like",
                "subject": {
                    "uri": format!("at://{TARGET_DID}/app.bsky.feed.post/p1"),
                    "cid": "bafyp1"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uri": "at://did:plc:bot123/app.bsky.feed.like/3kabc",
            "cid": "bafylike1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Feed returns one unactioned post; engage it live.
    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [feed_post("p1", TARGET_DID, false, true)]
        })))
        .mount(&server)
        .await;

    let posts = fast_collector().collect(&session, &target()).await;
    let post = skyboost::feed::oldest_unactioned(posts).unwrap();

    let report = skyboost::actions::engage(&session, &post, false).await;

    assert_eq!(report.like, skyboost::actions::ActionOutcome::Performed);
    assert_eq!(report.repost, skyboost::actions::ActionOutcome::AlreadyDone);
}

#[tokio::test]
async fn test_like_failure_does_not_prevent_repost() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    Mock::given(method("POST"))
        .and(path("/xrpc/com.atproto.repo.createRecord"))
        .and(body_partial_json(json!({"collection": "app.bsky.feed.like"})))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "InternalServerError",
            "message": "like failed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/xrpc/com.atproto.repo.createRecord"))
        .and(body_partial_json(json!({"collection": "app.bsky.feed.repost"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uri": "at://did:plc:bot123/app.bsky.feed.repost/3kdef",
            "cid": "bafyrepost1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [feed_post("p1", TARGET_DID, false, false)]
        })))
        .mount(&server)
        .await;

    let posts = fast_collector().collect(&session, &target()).await;
    let post = skyboost::feed::oldest_unactioned(posts).unwrap();

    let report = skyboost::actions::engage(&session, &post, false).await;

    assert!(matches!(report.like, skyboost::actions::ActionOutcome::Failed(_)));
    assert_eq!(report.repost, skyboost::actions::ActionOutcome::Performed);
}

#[tokio::test]
async fn test_dry_run_makes_no_write_calls() {
    let server = MockServer::start().await;
    let session = login(&server).await;

    Mock::given(method("POST"))
        .and(path("/xrpc/com.atproto.repo.createRecord"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/xrpc/app.bsky.feed.getAuthorFeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feed": [feed_post("p1", TARGET_DID, false, false)]
        })))
        .mount(&server)
        .await;

    let posts = fast_collector().collect(&session, &target()).await;
    let post = skyboost::feed::oldest_unactioned(posts).unwrap();

    let report = skyboost::actions::engage(&session, &post, true).await;

    assert_eq!(report.like, skyboost::actions::ActionOutcome::DryRun);
    assert_eq!(report.repost, skyboost::actions::ActionOutcome::DryRun);
}
