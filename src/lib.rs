//! Typed JSON fetch client for random-user profile envelopes.
//!
//! The crate is built around one fallible operation,
//! [`FetchClient::get_data`], which performs a single HTTP GET and parses
//! the body as JSON. The result is a [`Payload<T>`]: the caller names the
//! shape it expects, but the shape is only checked when the payload is
//! converted, not when it arrives.
//!
//! # Quick Start
//!
//! ```no_run
//! use roster::{FetchClient, Load, ResponseEnvelope};
//!
//! #[tokio::main]
//! async fn main() -> roster::Result<()> {
//!     let client = FetchClient::from_env()?;
//!
//!     // Fetch and convert in one step
//!     let envelope =
//!         ResponseEnvelope::load(&client, "https://randomuser.me/api/?results=5").await?;
//!     for record in &envelope {
//!         println!("{} <{}>", record.full_name(), record.email);
//!     }
//!
//!     // Or keep the raw payload and convert later
//!     let payload = client
//!         .get_data::<ResponseEnvelope>("https://randomuser.me/api/")
//!         .await?;
//!     println!("seed: {:?}", payload.pointer("/info/seed"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure handling
//!
//! Every fetch failure (bad URL, transport error, unreadable or non-JSON
//! body) is logged once through `tracing` and returned as
//! [`RosterError::FetchFailed`]. The HTTP status code is not inspected.
//!
//! # Configuration
//!
//! - `ROSTER_HTTP_TIMEOUT_SECS` (optional) - transport timeout; unset keeps
//!   the transport default
//! - `ROSTER_BASE_URL` (optional) - base path for the route table
//! - `ROSTER_API_URL` (optional, CLI) - source URL for the home view

mod client;
mod error;
mod models;
mod payload;
mod traits;

pub mod cli;
pub mod output;
pub mod router;
pub mod view;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::FetchClient;
pub use error::{Result, RosterError};
pub use payload::Payload;

// Re-export traits
pub use traits::Load;

// Re-export models
pub use models::{
    // Envelope types
    ResponseEnvelope,
    ResponseInfo,
    // Record types
    Coordinates,
    DateOfBirth,
    Identifier,
    Location,
    Login,
    Name,
    Picture,
    ResponseRecord,
    Street,
};

// Re-export navigation
pub use router::{routes, History, Route, RouteTable, View};
pub use view::{HomeData, HomePage, HomeView, RecordRow};
