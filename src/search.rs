//! Query-side of the workflow.
//!
//! A single free-text query is matched against every record in the snapshot
//! with a naive substring test after NFC normalization and lowercasing, and
//! the first matches (snapshot order) are shaped into the launcher's item
//! envelope. No tokenization, scoring, or prefix anchoring.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

use crate::models::AirportRecord;
use crate::snapshot;

/// Result list cap. Matches beyond this are dropped, keeping snapshot order.
pub const MAX_ITEMS: usize = 50;

/// The envelope the launcher renders: `{"items": [...]}`.
#[derive(Debug, Serialize)]
pub struct ResultList {
    pub items: Vec<SearchItem>,
}

/// One launcher result row.
#[derive(Debug, Serialize)]
pub struct SearchItem {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    pub icon: Icon,
}

#[derive(Debug, Serialize)]
pub struct Icon {
    pub path: String,
}

impl SearchItem {
    pub fn from_record(record: &AirportRecord) -> Self {
        SearchItem {
            uid: record.iata_code.clone(),
            title: format!("{} ({})", record.name, record.iata_code),
            subtitle: record.subtitle(),
            arg: record.iata_code.clone(),
            icon: Icon {
                path: record.icon_path(),
            },
        }
    }
}

/// NFC-compose then lowercase. Applied identically to the query and to each
/// record's haystack, so precomposed and decomposed Japanese/Latin text and
/// mixed-case ASCII compare equal under substring match.
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Scan `records` in order and return items for those whose haystack
/// contains the query, capped at [`MAX_ITEMS`]. An empty query matches
/// every record.
pub fn search(records: &[AirportRecord], query: &str) -> Vec<SearchItem> {
    let needle = normalize(query);
    records
        .iter()
        .filter(|record| normalize(&record.haystack()).contains(&needle))
        .take(MAX_ITEMS)
        .map(SearchItem::from_record)
        .collect()
}

/// Run a query against the snapshot at `snapshot_path` and return the
/// serialized envelope. Serialization happens before anything is printed,
/// so a failure never leaves partial JSON on stdout for the launcher to
/// misrender.
pub fn run_search(snapshot_path: &Path, query: &str) -> Result<String> {
    let records = snapshot::load(snapshot_path)?;
    let list = ResultList {
        items: search(&records, query),
    };
    Ok(serde_json::to_string(&list)?)
}
