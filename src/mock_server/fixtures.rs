//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{
    Coordinates, DateOfBirth, Identifier, Location, Login, Name, Picture, ResponseRecord, Street,
};

/// Seed of the default scenario's batch.
pub const DEFAULT_SEED: &str = "abc";

const GIVEN_NAMES: [&str; 6] = ["Ann", "Bo", "Cyd", "Dee", "Eli", "Fay"];
const FAMILY_NAMES: [&str; 6] = ["Lee", "Moss", "Nash", "Ortiz", "Park", "Quinn"];

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// The default dataset served by [`MockServer::start`](super::MockServer::start).
pub struct DefaultScenario {
    pub seed: String,
    pub records: Vec<ResponseRecord>,
}

impl Fixtures {
    /// Create a complete record for the given name.
    pub fn record(first: &str, last: &str) -> ResponseRecord {
        let username = format!("{}{}", first.to_lowercase(), last.to_lowercase());
        ResponseRecord {
            gender: "female".to_string(),
            name: Name {
                title: "Ms".to_string(),
                first: first.to_string(),
                last: last.to_string(),
            },
            location: Location {
                street: Street {
                    number: 9278,
                    name: "New Road".to_string(),
                },
                city: "Kilcoole".to_string(),
                state: "Waterford".to_string(),
                country: "Ireland".to_string(),
                postcode: 93027,
                coordinates: Coordinates {
                    latitude: "20.9267".to_string(),
                    longitude: "-7.9310".to_string(),
                },
            },
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            login: Login {
                uuid: format!("00000000-0000-4000-8000-{:0>12}", username.len()),
                username,
                password: "password".to_string(),
                salt: "salt".to_string(),
                md5: "5f4dcc3b5aa765d61d8327deb882cf99".to_string(),
                sha1: "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8".to_string(),
            },
            dob: DateOfBirth {
                date: "1993-07-20T09:44:18.674Z".to_string(),
                age: 31,
            },
            phone: "011-962-7516".to_string(),
            cell: "081-454-0666".to_string(),
            id: Identifier {
                name: "PPS".to_string(),
                value: "0390511T".to_string(),
            },
            picture: Picture {
                large: "https://randomuser.me/api/portraits/women/75.jpg".to_string(),
                medium: "https://randomuser.me/api/portraits/med/women/75.jpg".to_string(),
                thumbnail: "https://randomuser.me/api/portraits/thumb/women/75.jpg".to_string(),
            },
            nat: "IE".to_string(),
        }
    }

    /// Create `count` distinct records in a stable order.
    pub fn people(count: usize) -> Vec<ResponseRecord> {
        (0..count)
            .map(|i| {
                let first = GIVEN_NAMES[i % GIVEN_NAMES.len()];
                let last = FAMILY_NAMES[(i / GIVEN_NAMES.len()) % FAMILY_NAMES.len()];
                let mut record = Self::record(first, last);
                record.dob.age = 20 + i as i64;
                record
            })
            .collect()
    }

    /// The default scenario: three records under seed `abc`.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            seed: DEFAULT_SEED.to_string(),
            records: Self::people(3),
        }
    }
}
