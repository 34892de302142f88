//! Snapshot persistence.
//!
//! The snapshot is a JSON array of [`AirportRecord`] written with two-space
//! indentation and non-ASCII kept verbatim, so curated Japanese text stays
//! readable in diffs. Saves go through a temporary sibling file that is
//! renamed into place; an interrupted run leaves the previous snapshot
//! untouched.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::models::AirportRecord;

/// Load the snapshot at `path`. Missing or malformed files are errors; the
/// searcher has nothing useful to emit without the dataset.
pub fn load(path: &Path) -> Result<Vec<AirportRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    let records: Vec<AirportRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
    Ok(records)
}

/// Load the snapshot for a merge. An absent file means a first run and
/// yields an empty list; an unreadable or malformed file is still fatal.
pub fn load_or_empty(path: &Path) -> Result<Vec<AirportRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    load(path)
}

/// Index records by IATA code. Later records win on duplicate codes,
/// matching the merge's last-writer-wins rule.
pub fn index_by_iata(records: Vec<AirportRecord>) -> HashMap<String, AirportRecord> {
    records
        .into_iter()
        .map(|record| (record.iata_code.clone(), record))
        .collect()
}

/// Serialize `records` and atomically replace the snapshot at `path`.
pub fn save(path: &Path, records: &[AirportRecord]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    serde_json::to_writer_pretty(&mut tmp, records)
        .with_context(|| format!("Failed to serialize snapshot: {}", path.display()))?;
    tmp.flush()
        .with_context(|| format!("Failed to flush snapshot: {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace snapshot: {}", path.display()))?;
    Ok(())
}
