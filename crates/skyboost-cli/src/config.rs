//! Environment-backed run configuration.

use anyhow::{Context, Result, bail};

use skyboost::{Credentials, Did, PdsUrl};

/// Environment variable holding the bot account handle.
pub const HANDLE_VAR: &str = "BLUESKY_HANDLE";

/// Environment variable holding the bot account app password.
pub const PASSWORD_VAR: &str = "BLUESKY_PASSWORD";

/// Environment variable holding the target account DID.
pub const TARGET_VAR: &str = "TARGET_USER_DID";

/// Source of configuration secrets.
///
/// The process environment is the production source; tests substitute an
/// in-memory store, and a secret-store backend can slot in without touching
/// the pipeline.
pub trait SecretStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads secrets from the process environment.
pub struct EnvStore;

impl SecretStore for EnvStore {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

/// Resolved run configuration.
#[derive(Debug)]
pub struct Config {
    pub credentials: Credentials,
    pub target: Did,
    pub pds: PdsUrl,
}

impl Config {
    /// Load configuration from a secret store and the `--pds` flag value.
    ///
    /// Every missing or malformed value is fatal, and all values are read
    /// eagerly so failures surface before any network call.
    pub fn load(store: &dyn SecretStore, pds: &str) -> Result<Self> {
        let handle = require(store, HANDLE_VAR)?;
        let password = require(store, PASSWORD_VAR)?;
        let target = require(store, TARGET_VAR)?;

        let target =
            Did::new(&target).with_context(|| format!("{TARGET_VAR} is not a valid DID"))?;
        let pds = PdsUrl::new(pds).context("invalid PDS URL")?;

        Ok(Self {
            credentials: Credentials::new(handle, password),
            target,
            pds,
        })
    }
}

fn require(store: &dyn SecretStore, key: &str) -> Result<String> {
    match store.get(key) {
        Some(value) => Ok(value),
        None => bail!("{key} environment variable not set"),
    }
}
