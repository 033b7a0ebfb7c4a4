//! Remote access layer for the Burrow client.
//!
//! This crate owns everything that crosses the wire boundary:
//!
//! - the uniform `{success, error, data}` response envelope and the domain
//!   DTOs ([`types`]),
//! - the [`RemoteApi`](client::RemoteApi) trait, one method per backend
//!   operation,
//! - the reqwest-backed [`HttpApi`](http::HttpApi) with the authentication
//!   gate: bearer-token injection and error-message normalization,
//! - the process-wide [`CredentialStore`](credentials::CredentialStore).
//!
//! The controllers in the root crate depend on the trait, never on reqwest
//! directly, so tests can swap in a scripted implementation.

pub mod client;
pub mod credentials;
pub mod error;
pub mod http;
pub mod types;

pub use client::RemoteApi;
pub use credentials::{CredentialStore, ACCESS_TOKEN_KEY};
pub use error::RemoteError;
pub use http::HttpApi;
