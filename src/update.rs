//! Merge-update of the airport snapshot.
//!
//! Downloads the upstream OurAirports CSV, joins each row against the prior
//! snapshot on IATA code, and writes a fresh snapshot. Upstream is
//! authoritative for the factual fields and may add or remove airports;
//! the curated Japanese fields are irreplaceable human input and survive
//! the rebuild. The country-name table only fills records that carry no
//! curated country name, it never overrides one.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::countries;
use crate::models::AirportRecord;
use crate::snapshot;

/// Upstream authoritative source. Public raw CSV, UTF-8, header row.
pub const AIRPORTS_CSV_URL: &str =
    "https://raw.githubusercontent.com/davidmegginson/ourairports-data/main/airports.csv";

/// The columns the merge consumes, keyed by header name. Missing columns
/// default to empty strings; extra upstream columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamRow {
    #[serde(default)]
    pub iata_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default)]
    pub iso_country: String,
}

/// Fetch the CSV body. One attempt, no retries, no caching. The body is
/// decoded strictly so invalid UTF-8 aborts the run instead of silently
/// corrupting the snapshot.
pub fn fetch_csv(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("Failed to download {}", url))?
        .error_for_status()
        .with_context(|| format!("Failed to download {}", url))?;
    let bytes = response
        .bytes()
        .with_context(|| format!("Failed to read body from {}", url))?;
    let body = String::from_utf8(bytes.to_vec())
        .with_context(|| format!("Body from {} is not valid UTF-8", url))?;
    Ok(body)
}

/// Parse the CSV body into rows, preserving input order.
pub fn parse_rows(body: &str) -> Result<Vec<UpstreamRow>> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: UpstreamRow = result.context("Failed to parse upstream CSV")?;
        rows.push(row);
    }
    Ok(rows)
}

/// Merge upstream rows against the prior snapshot index.
///
/// For each row, in order: trim the IATA code and skip the row when empty;
/// take the factual fields from upstream; keep the prior curated Japanese
/// fields, with the country table as fallback for `country_jp`. Duplicate
/// IATA codes upstream resolve last-writer-wins, keeping the position of
/// the code's first appearance so output order stays deterministic.
pub fn merge(
    rows: &[UpstreamRow],
    prior: &HashMap<String, AirportRecord>,
) -> Vec<AirportRecord> {
    let mut merged: Vec<AirportRecord> = Vec::with_capacity(rows.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let iata_code = row.iata_code.trim();
        if iata_code.is_empty() {
            continue;
        }

        let existing = prior.get(iata_code);
        let country_jp = match existing.map(|p| p.country_jp.as_str()) {
            Some(curated) if !curated.is_empty() => curated.to_string(),
            _ => countries::country_name_jp(&row.iso_country).to_string(),
        };

        let record = AirportRecord {
            iata_code: iata_code.to_string(),
            name: row.name.clone(),
            municipality: row.municipality.clone(),
            iso_country: row.iso_country.clone(),
            country_jp,
            state_jp: existing.map(|p| p.state_jp.clone()).unwrap_or_default(),
            city_jp: existing.map(|p| p.city_jp.clone()).unwrap_or_default(),
        };

        match positions.get(iata_code) {
            Some(&pos) => merged[pos] = record,
            None => {
                positions.insert(iata_code.to_string(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

/// Full update pass: fetch, parse, load the prior snapshot, merge, persist.
/// Any failure aborts before the final write and leaves the existing
/// snapshot untouched.
pub fn run_update(url: &str, snapshot_path: &Path) -> Result<()> {
    println!("downloading {}", url);
    let body = fetch_csv(url)?;
    let rows = parse_rows(&body)?;
    println!("  fetched: {} rows", rows.len());

    let prior = snapshot::index_by_iata(snapshot::load_or_empty(snapshot_path)?);
    println!("  prior records: {}", prior.len());

    let merged = merge(&rows, &prior);
    println!("  merged: {} airports with IATA codes", merged.len());

    snapshot::save(snapshot_path, &merged)?;
    println!("  wrote: {}", snapshot_path.display());
    println!("ok");

    Ok(())
}
