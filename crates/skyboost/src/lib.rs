//! skyboost - single-run Bluesky engagement bot.
//!
//! Authenticates against a PDS, walks a target account's authored feed to
//! find the oldest post the authenticated account has not yet liked and
//! reposted, and performs those two actions on that single post.
//!
//! # Example
//!
//! ```no_run
//! use skyboost::{Collector, Credentials, Did, PdsUrl, Session, actions, feed};
//!
//! # async fn example() -> Result<(), skyboost::Error> {
//! let pds = PdsUrl::new("https://bsky.social")?;
//! let credentials = Credentials::new("bot.bsky.social", "app-password");
//! let session = Session::login(&pds, credentials).await?;
//!
//! let target = Did::new("did:plc:z72i7hdynmk6r22z27h6tvur")?;
//! let posts = Collector::default().collect(&session, &target).await;
//!
//! if let Some(post) = feed::oldest_unactioned(posts) {
//!     let report = actions::engage(&session, &post, false).await;
//!     println!("{}: {:?}", post.uri, report);
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod auth;
pub mod error;
pub mod feed;
pub mod types;
pub mod xrpc;

pub use auth::{Credentials, Session};
pub use error::Error;
pub use feed::{Collector, PostView};
pub use types::{Did, Nsid, PdsUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
