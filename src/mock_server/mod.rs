//! Mock profile API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! random-user API for integration and end-to-end testing. Unlike wiremock,
//! which mocks at the HTTP level per-test, this server keeps seeded batches
//! and a request counter across requests.
//!
//! # Example
//!
//! ```ignore
//! use roster::mock_server::MockServer;
//! use roster::{FetchClient, Load, ResponseEnvelope};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = FetchClient::new().unwrap();
//!
//!     // Server comes with default fixtures under seed "abc"
//!     let envelope = ResponseEnvelope::load(&client, &server.api_url("results=2")).await.unwrap();
//!     assert_eq!(envelope.info.seed, "abc");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, DEFAULT_SEED};
pub use server::MockServer;
pub use state::{MockState, MOCK_API_VERSION};
