//! Bearer token types issued by createSession.

use std::fmt;

/// An access token for authenticated XRPC requests.
///
/// Short-lived JWT used for the lifetime of a single run. Treat as opaque;
/// never logged or displayed in Debug output.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A refresh token issued alongside the access token.
///
/// The bot never refreshes its session (a run is a single pass), but the
/// token is part of the session the PDS hands back and is carried for the
/// lifetime of the run. Never logged or displayed in Debug output.
#[derive(Clone)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

// Hide token value in Debug output
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}
