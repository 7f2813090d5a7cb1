//! The home view: a table of profiles loaded from one envelope.
//!
//! The view decodes only the fields it displays. Anything else in a record
//! (postcode, credentials, coordinates) is never read, so it cannot fail
//! the view.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::client::FetchClient;
use crate::error::Result;
use crate::models::{Name, ResponseEnvelope, ResponseInfo, ResponseRecord};
use crate::payload::Payload;

/// Data source and state for the `home` route.
#[derive(Debug, Clone)]
pub struct HomeView {
    source_url: String,
}

/// What the home view displays after a successful load.
#[derive(Debug, Clone, Serialize)]
pub struct HomeData {
    pub info: ResponseInfo,
    /// One row per record, in server order.
    pub rows: Vec<RecordRow>,
}

/// One load of the home view: the rows it shows and the payload they came
/// from.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub data: HomeData,
    pub payload: Payload<ResponseEnvelope>,
}

/// Display projection of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct RecordRow {
    pub name: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub age: i64,
    #[tabled(rename = "nat")]
    pub nationality: String,
    #[tabled(skip)]
    pub thumbnail: String,
}

// Wire shapes holding only what the table shows.

#[derive(Deserialize)]
struct DisplayEnvelope {
    results: Vec<DisplayRecord>,
    info: ResponseInfo,
}

#[derive(Deserialize)]
struct DisplayRecord {
    gender: String,
    name: Name,
    location: DisplayLocation,
    email: String,
    dob: DisplayDob,
    phone: String,
    picture: DisplayPicture,
    nat: String,
}

#[derive(Deserialize)]
struct DisplayLocation {
    city: String,
    state: String,
    country: String,
}

#[derive(Deserialize)]
struct DisplayDob {
    age: i64,
}

#[derive(Deserialize)]
struct DisplayPicture {
    thumbnail: String,
}

impl From<&ResponseRecord> for RecordRow {
    fn from(r: &ResponseRecord) -> Self {
        Self {
            name: r.full_name(),
            gender: r.gender.clone(),
            email: r.email.clone(),
            phone: r.phone.clone(),
            location: r.location.summary(),
            age: r.dob.age,
            nationality: r.nat.clone(),
            thumbnail: r.picture.thumbnail.clone(),
        }
    }
}

impl From<DisplayRecord> for RecordRow {
    fn from(r: DisplayRecord) -> Self {
        Self {
            name: r.name.display(),
            gender: r.gender,
            email: r.email,
            phone: r.phone,
            location: format!(
                "{}, {}, {}",
                r.location.city, r.location.state, r.location.country
            ),
            age: r.dob.age,
            nationality: r.nat,
            thumbnail: r.picture.thumbnail,
        }
    }
}

impl From<&ResponseEnvelope> for HomeData {
    fn from(envelope: &ResponseEnvelope) -> Self {
        Self {
            info: envelope.info.clone(),
            rows: envelope.iter().map(RecordRow::from).collect(),
        }
    }
}

impl HomeData {
    /// Project a fetched payload into rows, reading only displayed fields.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ShapeMismatch`](crate::RosterError::ShapeMismatch)
    /// if a displayed field is missing or has the wrong type.
    pub fn from_payload(payload: &Payload<ResponseEnvelope>) -> Result<Self> {
        let display: DisplayEnvelope = payload.project()?;

        let declared = display.info.results;
        let actual = display.results.len();
        if i64::try_from(actual).map_or(true, |len| len != declared) {
            tracing::warn!(
                declared,
                actual,
                "envelope record count differs from info.results"
            );
        }

        Ok(Self {
            info: display.info,
            rows: display.results.into_iter().map(RecordRow::from).collect(),
        })
    }
}

impl HomeView {
    /// Create the view over a fully-formed source URL.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
        }
    }

    /// The URL the view loads from.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Fetch the source once and project it into display rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or a displayed field does not
    /// decode.
    pub async fn load(&self, client: &FetchClient) -> Result<HomePage> {
        let payload = client
            .get_data::<ResponseEnvelope>(&self.source_url)
            .await?;
        let data = HomeData::from_payload(&payload)?;
        Ok(HomePage { data, payload })
    }
}
