//! Load trait for fetching a typed shape from a URL.

use async_trait::async_trait;

use crate::client::FetchClient;
use crate::error::Result;

/// Fetch a value of this shape from a caller-supplied URL.
///
/// Implementations perform exactly one request through
/// [`FetchClient::get_data`] and then convert the payload. A transport or
/// JSON failure surfaces as [`RosterError::FetchFailed`]; a payload that
/// parses but has the wrong shape surfaces as
/// [`RosterError::ShapeMismatch`].
///
/// [`RosterError::FetchFailed`]: crate::RosterError::FetchFailed
/// [`RosterError::ShapeMismatch`]: crate::RosterError::ShapeMismatch
///
/// # Example
///
/// ```ignore
/// use roster::{FetchClient, Load, ResponseEnvelope};
///
/// let client = FetchClient::from_env()?;
/// let envelope = ResponseEnvelope::load(&client, "https://randomuser.me/api/").await?;
/// ```
#[async_trait]
pub trait Load: Sized {
    /// Fetch and convert.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not match
    /// this shape.
    async fn load(client: &FetchClient, url: &str) -> Result<Self>;
}
