//! Response envelope model and its `Load` implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::FetchClient;
use crate::error::{Result, RosterError};
use crate::models::record::ResponseRecord;
use crate::payload::Payload;
use crate::traits::Load;

/// The top-level object returned by one API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Records in the order the server delivered them.
    pub results: Vec<ResponseRecord>,

    /// Request metadata.
    pub info: ResponseInfo,
}

/// Metadata describing the batch an envelope belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    /// Seed correlating a request batch; the same seed reproduces the same
    /// records upstream.
    pub seed: String,

    /// Declared number of records. Not checked against `results`.
    pub results: i64,

    /// Page number (1-indexed).
    pub page: i64,

    /// API version string.
    pub version: String,
}

impl ResponseEnvelope {
    /// Returns the number of records carried.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the envelope carries no records.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns an iterator over the records in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResponseRecord> {
        self.results.iter()
    }

    /// Whether `info.results` agrees with the number of records carried.
    ///
    /// Informational only; decoding never rejects a mismatch.
    pub fn declared_count_matches(&self) -> bool {
        i64::try_from(self.results.len()).map_or(false, |len| len == self.info.results)
    }
}

impl IntoIterator for ResponseEnvelope {
    type Item = ResponseRecord;
    type IntoIter = std::vec::IntoIter<ResponseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResponseEnvelope {
    type Item = &'a ResponseRecord;
    type IntoIter = std::slice::Iter<'a, ResponseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl Payload<ResponseEnvelope> {
    /// Number of entries in the raw `results` array.
    pub fn record_count(&self) -> usize {
        self.pointer("/results")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Decode the record at `index` on its own.
    ///
    /// Other records are not touched, so one malformed neighbour does not
    /// stop this one from decoding.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::RecordOutOfRange`] if there is no such record,
    /// or [`RosterError::ShapeMismatch`] if it does not decode.
    pub fn record(&self, index: usize) -> Result<ResponseRecord> {
        self.decode_at(&format!("/results/{index}"))
            .unwrap_or_else(|| {
                Err(RosterError::RecordOutOfRange {
                    index,
                    len: self.record_count(),
                })
            })
    }
}

#[async_trait]
impl Load for ResponseEnvelope {
    #[tracing::instrument(skip(client))]
    async fn load(client: &FetchClient, url: &str) -> Result<Self> {
        client.get_data::<ResponseEnvelope>(url).await?.into_typed()
    }
}
