//! # challonge-client
//!
//! Typed async client for the Challonge v1 REST API.
//! Every request is signed with the [`Credential`] the client was built with.

mod client;
mod error;
pub mod matches;
pub mod models;
pub mod participants;
pub mod tournaments;
pub mod transport;

#[cfg(test)]
mod mock;

pub use challonge_core::{AuthScheme, Credential, Settings, UsernamePolicy};
pub use client::ChallongeClient;
pub use error::{ClientError, Result};
pub use models::*;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
