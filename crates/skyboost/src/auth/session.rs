//! Authenticated PDS session.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::auth::credentials::Credentials;
use crate::auth::tokens::{AccessToken, RefreshToken};
use crate::error::{AuthError, Error};
use crate::feed::types::AuthorFeedPage;
use crate::types::{Did, Nsid, PdsUrl};
use crate::xrpc::client::XrpcClient;
use crate::xrpc::endpoints::{
    CREATE_RECORD, CREATE_SESSION, CreateRecordRequest, CreateRecordResponse,
    CreateSessionRequest, CreateSessionResponse, GET_AUTHOR_FEED, GetAuthorFeedQuery,
    GetAuthorFeedResponse,
};

/// An authenticated session against a single PDS.
///
/// Created once per run by [`Session::login`]. Owns the bearer tokens and
/// the resolved account identity for the lifetime of the process; never
/// persisted, used strictly serially.
pub struct Session {
    did: Did,
    handle: String,
    access_token: AccessToken,
    refresh_token: RefreshToken,
    client: XrpcClient,
}

impl Session {
    /// Exchange credentials for a session via createSession.
    ///
    /// A single outbound call with no retry; a rejected login surfaces as
    /// [`Error::Auth`] and an unreachable network as [`Error::Transport`],
    /// both fatal to the run.
    #[instrument(skip(pds, credentials), fields(pds = %pds, identifier = credentials.identifier()))]
    pub async fn login(pds: &PdsUrl, credentials: Credentials) -> Result<Self> {
        let client = XrpcClient::new(pds.clone());

        let request = CreateSessionRequest {
            identifier: credentials.identifier(),
            password: credentials.password(),
        };

        let response: CreateSessionResponse = client
            .procedure(CREATE_SESSION, &request)
            .await
            .map_err(|e| match e {
                Error::Protocol(p) if p.is_auth_error() => AuthError::InvalidCredentials.into(),
                other => other,
            })?;

        let did = Did::new(&response.did)?;
        info!(handle = %response.handle, did = %did, "session created");

        Ok(Self {
            did,
            handle: response.handle,
            access_token: AccessToken::new(response.access_jwt),
            refresh_token: RefreshToken::new(response.refresh_jwt),
            client,
        })
    }

    /// Returns the DID resolved for the authenticated account.
    pub fn did(&self) -> &Did {
        &self.did
    }

    /// Returns the display handle resolved for the authenticated account.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Returns the refresh token issued at login.
    pub fn refresh_token(&self) -> &RefreshToken {
        &self.refresh_token
    }

    /// Fetch one page of an account's authored feed.
    #[instrument(skip(self), fields(%actor))]
    pub async fn get_author_feed(
        &self,
        actor: &Did,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<AuthorFeedPage> {
        debug!("fetching author feed page");

        let query = GetAuthorFeedQuery {
            actor: actor.as_str(),
            limit,
            cursor,
        };

        let response: GetAuthorFeedResponse = self
            .client
            .query_authed(GET_AUTHOR_FEED, &query, self.access_token.as_str())
            .await?;

        Ok(AuthorFeedPage {
            items: response.feed,
            cursor: response.cursor,
        })
    }

    /// Create a record in the authenticated account's repository.
    #[instrument(skip(self, record), fields(did = %self.did, %collection))]
    pub async fn create_record<R>(&self, collection: &Nsid, record: &R) -> Result<CreatedRecord>
    where
        R: Serialize + fmt::Debug,
    {
        debug!("creating record");

        let request = CreateRecordRequest {
            repo: self.did.as_str(),
            collection: collection.as_str(),
            record,
        };

        let response: CreateRecordResponse = self
            .client
            .procedure_authed(CREATE_RECORD, &request, self.access_token.as_str())
            .await?;

        Ok(CreatedRecord {
            uri: response.uri,
            cid: response.cid,
        })
    }
}

/// Reference to a record created in the session account's repository.
#[derive(Debug, Clone)]
pub struct CreatedRecord {
    pub uri: String,
    pub cid: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("did", &self.did)
            .field("handle", &self.handle)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
