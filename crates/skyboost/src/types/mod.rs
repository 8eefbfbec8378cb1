//! Validated AT Protocol identifier types.

mod did;
mod nsid;
mod pds_url;

pub use did::Did;
pub use nsid::Nsid;
pub use pds_url::PdsUrl;
