//! Burrow client core.
//!
//! The layer between a user intent and a typed, observable screen state:
//!
//! - [`state`] — the `RequestState` lifecycle model and error taxonomy,
//! - [`container`] — single-writer broadcast cells with replay-of-latest,
//! - [`controller`] — the shared fetch and item-action contracts,
//! - [`scope`] — screen-lifetime scopes that abandon in-flight work,
//! - [`controllers`] — one controller per screen concern.
//!
//! The wire boundary lives in the `remote` crate, re-exported here.

pub mod container;
pub mod controller;
pub mod controllers;
pub mod scope;
pub mod state;

pub use remote;
