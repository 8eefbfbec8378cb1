//! Credentials, tokens, and the authenticated session.

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::{CreatedRecord, Session};
pub use tokens::{AccessToken, RefreshToken};
