//! Core components of the `jqdata-rs` client.
//!
//! This module contains the protocol layer every remote method goes through:
//! - The main [`JqClient`], its builder, and the session token.
//! - The primary [`JqError`] type.
//! - Request envelopes and the endpoint catalog.
//! - The tabular response parser.

/// The main client (`JqClient`), builder, and session handling.
pub mod client;
/// Static catalog of remote methods and their response shapes.
pub mod endpoint;
/// JSON request bodies.
pub mod envelope;
/// The primary error type (`JqError`) for the crate.
pub mod error;
/// CSV-like response decoding.
pub mod table;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::JqClient`
pub use client::{JqClient, JqClientBuilder, Session};
pub use endpoint::{Endpoint, Shape};
pub use envelope::{ParamValue, Params, RequestEnvelope};
pub use error::JqError;
pub use table::{FromRow, Row, Table};
