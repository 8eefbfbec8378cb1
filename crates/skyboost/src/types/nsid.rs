//! Namespaced Identifier (NSID) type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated AT Protocol Namespaced Identifier (NSID).
///
/// NSIDs use reverse-DNS notation to identify record collections, e.g.
/// `app.bsky.feed.like`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nsid(String);

impl Nsid {
    /// Create a new NSID from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid NSID format.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the full NSID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let invalid = |reason: &str| InvalidInputError::Nsid {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let segments: Vec<&str> = s.split('.').collect();

        // At least an authority (two segments) plus a name.
        if segments.len() < 3 {
            return Err(invalid("must have at least 3 dot-separated segments").into());
        }

        for segment in segments {
            if segment.is_empty() {
                return Err(invalid("segments must be non-empty").into());
            }
            if !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(invalid("segments must be alphanumeric").into());
            }
        }

        Ok(())
    }
}

impl fmt::Display for Nsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Nsid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Nsid {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Nsid> for String {
    fn from(nsid: Nsid) -> Self {
        nsid.0
    }
}
