//! Core data model shared by the searcher and the updater.
//!
//! The snapshot is a JSON array of [`AirportRecord`]. Field declaration
//! order here fixes the key order in the serialized snapshot, which keeps
//! rebuilds diff-friendly and byte-stable.

use serde::{Deserialize, Serialize};

/// One airport, uniquely identified by its IATA code.
///
/// Every field is a plain `String` that defaults to empty on deserialization,
/// so records with missing keys parse cleanly and downstream code never has
/// to null-check. The first four fields are authoritative upstream data; the
/// `*_jp` fields are locally curated Japanese names that the updater must
/// preserve across rebuilds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportRecord {
    #[serde(default)]
    pub iata_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default)]
    pub iso_country: String,
    #[serde(default)]
    pub country_jp: String,
    #[serde(default)]
    pub state_jp: String,
    #[serde(default)]
    pub city_jp: String,
}

impl AirportRecord {
    /// The text a query is matched against: name, municipality, and the
    /// Japanese locality fields joined with single spaces. Empty fields
    /// contribute an empty string; adjacent spaces are tolerated, and a
    /// query may span the boundary between two fields.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name, self.municipality, self.country_jp, self.state_jp, self.city_jp
        )
    }

    /// Launcher subtitle: the non-empty Japanese fields in city, state,
    /// country order joined with `" - "`, falling back to
    /// `"<municipality>, <iso_country>"` when no curation exists.
    pub fn subtitle(&self) -> String {
        let parts: Vec<&str> = [&self.city_jp, &self.state_jp, &self.country_jp]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect();
        if parts.is_empty() {
            format!("{}, {}", self.municipality, self.iso_country)
        } else {
            parts.join(" - ")
        }
    }

    /// Flag icon path for the launcher. An empty country code yields the
    /// degenerate `flags/.png`; the launcher tolerates the missing asset.
    pub fn icon_path(&self) -> String {
        format!("flags/{}.png", self.iso_country)
    }
}
