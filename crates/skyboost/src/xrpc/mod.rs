//! XRPC transport: HTTP client and endpoint definitions.

pub(crate) mod client;
pub(crate) mod endpoints;

pub use client::XrpcClient;
