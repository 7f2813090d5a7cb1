//! HTTP fetch client.
//!
//! [`FetchClient::get_data`] is the one fallible network operation in the
//! crate: a single GET whose body is parsed as JSON and handed back as a
//! [`Payload`] tagged with the caller's expected shape.

use std::env;
use std::error::Error as StdError;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::{Result, RosterError};
use crate::payload::Payload;

const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding an optional transport timeout in seconds.
pub const TIMEOUT_ENV: &str = "ROSTER_HTTP_TIMEOUT_SECS";

/// Low-level fetch client.
///
/// Holds no per-request state, so any number of calls may be in flight at
/// once. This struct is cheaply cloneable; clones reference the same
/// underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use roster::{FetchClient, ResponseEnvelope};
///
/// # async fn example() -> roster::Result<()> {
/// let client = FetchClient::new()?;
/// let payload = client
///     .get_data::<ResponseEnvelope>("https://randomuser.me/api/?results=5")
///     .await?;
/// let envelope = payload.into_typed()?;
/// println!("seed {}", envelope.info.seed);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FetchClient {
    http: Client,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// The raw reason a fetch did not yield JSON. Never exposed; it is logged
/// and then flattened into [`RosterError::FetchFailed`].
#[derive(Debug, thiserror::Error)]
enum FetchCause {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("response body is not JSON: {0}")]
    NotJson(#[from] serde_json::Error),
}

impl FetchClient {
    /// Create a client with the transport's default timeout behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Create a client from environment variables.
    ///
    /// Reads `ROSTER_HTTP_TIMEOUT_SECS` for an optional transport timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        let timeout = parse_timeout(env::var(TIMEOUT_ENV).ok().as_deref())?;
        Self::with_timeout(timeout)
    }

    /// Create a client with an explicit transport timeout.
    ///
    /// `None` leaves the transport default in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| {
            RosterError::InvalidConfig(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self { http, timeout })
    }

    /// The configured transport timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Fetch `url` and parse the body as JSON, tagged with shape `T`.
    ///
    /// Performs exactly one GET. The status code is not inspected: an error
    /// status with a JSON body is returned like any other payload. `T` is
    /// not checked here; see [`Payload`].
    ///
    /// On failure exactly one error event is logged with the underlying
    /// cause before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::FetchFailed`] if the URL is invalid, the
    /// request cannot be completed, the body cannot be read, or the body is
    /// not JSON.
    #[tracing::instrument(skip(self), fields(shape = std::any::type_name::<T>()))]
    pub async fn get_data<T>(&self, url: &str) -> Result<Payload<T>> {
        match self.fetch_value(url).await {
            Ok(value) => {
                tracing::debug!("fetched JSON payload");
                Ok(Payload::new(value))
            }
            Err(cause) => {
                let message = describe(&cause);
                tracing::error!(error = %message, "fetch failed");
                Err(RosterError::FetchFailed { message })
            }
        }
    }

    async fn fetch_value(&self, url: &str) -> core::result::Result<Value, FetchCause> {
        let url = Url::parse(url)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchCause::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(FetchCause::Body)?;
        tracing::trace!(%status, bytes = body.len(), "response received");

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Render an error and its source chain as one line.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn parse_timeout(raw: Option<&str>) -> Result<Option<Duration>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(secs) => secs
            .parse::<u64>()
            .map(|s| Some(Duration::from_secs(s)))
            .map_err(|_| {
                RosterError::InvalidConfig(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got '{secs}'"
                ))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = FetchClient::with_timeout(Some(Duration::from_secs(5))).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("FetchClient"));
        assert!(debug.contains("timeout"));
    }

    #[test]
    fn test_default_client_has_no_timeout() {
        let client = FetchClient::new().unwrap();
        assert_eq!(client.timeout(), None);
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(None).unwrap(), None);
        assert_eq!(parse_timeout(Some("  ")).unwrap(), None);
        assert_eq!(
            parse_timeout(Some("30")).unwrap(),
            Some(Duration::from_secs(30))
        );
        assert!(matches!(
            parse_timeout(Some("soon")),
            Err(RosterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_describe_includes_cause() {
        let cause = FetchCause::from(serde_json::from_str::<Value>("not json").unwrap_err());
        let message = describe(&cause);
        assert!(message.starts_with("response body is not JSON"));
    }

    #[tokio::test]
    async fn test_invalid_url_is_fetch_failure() {
        let client = FetchClient::new().unwrap();
        let err = client.get_data::<Value>("not a url").await.unwrap_err();
        match err {
            RosterError::FetchFailed { message } => assert!(message.contains("invalid URL")),
            other => panic!("Expected FetchFailed, got {other:?}"),
        }
    }
}
