//! Profile record model.

use serde::{Deserialize, Serialize};

/// One subject's full profile within an envelope.
///
/// Every field is required. Values are taken as delivered: nothing here is
/// validated, so a structurally complete record with a negative age or an
/// empty email decodes without complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Free-text gender as reported by the service.
    pub gender: String,

    /// Personal name.
    pub name: Name,

    /// Postal location.
    pub location: Location,

    /// Email address (unvalidated).
    pub email: String,

    /// Account credentials. Opaque to this crate.
    pub login: Login,

    /// Date of birth.
    pub dob: DateOfBirth,

    /// Landline number (unvalidated).
    pub phone: String,

    /// Mobile number (unvalidated).
    pub cell: String,

    /// Labeled external identifier.
    pub id: Identifier,

    /// Portrait URLs.
    pub picture: Picture,

    /// Nationality code.
    pub nat: String,
}

/// A personal name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// A postal location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,

    /// Postal code.
    ///
    /// Numeric only. Upstream services that return alphanumeric postcodes
    /// (e.g. "EC1A 1BB") will not decode into this type.
    pub postcode: i64,

    pub coordinates: Coordinates,
}

/// Street address line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: i64,
    pub name: String,
}

/// Geographic coordinates, kept as the strings the service sent so no
/// precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

/// Login credentials. None of these are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: String,
    pub username: String,
    pub password: String,
    pub salt: String,
    pub md5: String,
    pub sha1: String,
}

/// Date of birth. `date` is left as the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub date: String,
    pub age: i64,
}

/// A labeled identifier such as a national ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub value: String,
}

/// Portrait URLs at three resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

impl Name {
    /// Title, first and last name joined with spaces. Empty parts are skipped.
    pub fn display(&self) -> String {
        [&self.title, &self.first, &self.last]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ResponseRecord {
    /// See [`Name::display`].
    pub fn full_name(&self) -> String {
        self.name.display()
    }
}

impl Location {
    /// "city, state, country".
    pub fn summary(&self) -> String {
        format!("{}, {}, {}", self.city, self.state, self.country)
    }

    /// Street number and name, e.g. "9278 New Road".
    pub fn street_line(&self) -> String {
        format!("{} {}", self.street.number, self.street.name)
    }
}
