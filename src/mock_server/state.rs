//! Mock server state management.
//!
//! Provides the in-memory data store for the mock profile API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{ResponseEnvelope, ResponseInfo, ResponseRecord};

/// API version the mock reports in envelope metadata.
pub const MOCK_API_VERSION: &str = "1.4";

/// Shared state for the mock server.
///
/// Holds record batches keyed by seed, plus a count of served requests.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Record batches indexed by seed.
    pub batches: HashMap<String, Vec<ResponseRecord>>,

    /// Seed served when the request does not name one.
    pub default_seed: Option<String>,

    /// Number of `/api` requests served so far.
    pub hits: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a batch of records under a seed. The first batch added becomes
    /// the default.
    pub fn with_batch(mut self, seed: &str, records: Vec<ResponseRecord>) -> Self {
        if self.default_seed.is_none() {
            self.default_seed = Some(seed.to_string());
        }
        self.batches.insert(seed.to_string(), records);
        self
    }

    /// Build the envelope for a seed, truncated to `count` records.
    ///
    /// Returns `None` if the seed is unknown (or no seed is given and there
    /// is no default).
    pub fn envelope(
        &self,
        seed: Option<&str>,
        count: Option<usize>,
        page: i64,
    ) -> Option<ResponseEnvelope> {
        let seed = seed.or(self.default_seed.as_deref())?;
        let records = self.batches.get(seed)?;
        let results: Vec<ResponseRecord> = records
            .iter()
            .take(count.unwrap_or(records.len()))
            .cloned()
            .collect();

        Some(ResponseEnvelope {
            info: ResponseInfo {
                seed: seed.to_string(),
                results: results.len() as i64,
                page,
                version: MOCK_API_VERSION.to_string(),
            },
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    #[test]
    fn test_first_batch_is_default() {
        let state = MockState::new()
            .with_batch("abc", vec![Fixtures::record("Ann", "Lee")])
            .with_batch("xyz", vec![]);

        let envelope = state.envelope(None, None, 1).unwrap();
        assert_eq!(envelope.info.seed, "abc");
        assert_eq!(envelope.len(), 1);
    }

    #[test]
    fn test_envelope_truncates_to_count() {
        let state = MockState::new().with_batch("abc", Fixtures::people(5));

        let envelope = state.envelope(Some("abc"), Some(2), 3).unwrap();
        assert_eq!(envelope.len(), 2);
        assert_eq!(envelope.info.results, 2);
        assert_eq!(envelope.info.page, 3);
    }

    #[test]
    fn test_unknown_seed() {
        let state = MockState::new().with_batch("abc", vec![]);
        assert!(state.envelope(Some("nope"), None, 1).is_none());
        assert!(MockState::new().envelope(None, None, 1).is_none());
    }
}
