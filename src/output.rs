//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{ResponseInfo, ResponseRecord};

/// Trait for human-readable key-value output.
///
/// Implemented by data types to provide formatted output suitable for
/// terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for ResponseRecord {
    fn pretty_print(&self) -> String {
        let header = self.full_name();
        let divider = "─".repeat(header.chars().count().max(30));

        let lines = vec![
            header,
            divider,
            format!("Gender:         {}", self.gender),
            format!("Born:           {} (age {})", self.dob.date, self.dob.age),
            format!("Nationality:    {}", self.nat),
            format!("Email:          {}", self.email),
            format!("Phone:          {}", self.phone),
            format!("Cell:           {}", self.cell),
            format!("Street:         {}", self.location.street_line()),
            format!("Location:       {}", self.location.summary()),
            format!("Postcode:       {}", self.location.postcode),
            format!(
                "Coordinates:    {}, {}",
                self.location.coordinates.latitude, self.location.coordinates.longitude
            ),
            format!("Username:       {}", self.login.username),
            format!("ID:             {} {}", self.id.name, self.id.value),
            format!("Picture:        {}", self.picture.large),
        ];

        lines.join("\n")
    }
}

impl PrettyPrint for ResponseInfo {
    fn pretty_print(&self) -> String {
        format!(
            "Seed {} · page {} · {} results · v{}",
            self.seed, self.page, self.results, self.version
        )
    }
}
