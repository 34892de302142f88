//! Dataset refresh entry point.
//!
//! Downloads the upstream OurAirports CSV and rewrites the snapshot,
//! preserving curated Japanese fields. Runs without arguments; the flags
//! exist to redirect I/O in tests. Fail-fast: any fetch, parse, or write
//! error exits non-zero and leaves the existing snapshot untouched.

use clap::Parser;
use std::path::PathBuf;

use airport_lookup::update;

/// Refresh the airport snapshot from the upstream OurAirports CSV.
#[derive(Parser)]
#[command(
    name = "airport-update",
    about = "Refresh the airport snapshot from OurAirports, preserving curated Japanese fields",
    version
)]
struct Cli {
    /// Upstream CSV URL.
    #[arg(long, default_value = update::AIRPORTS_CSV_URL)]
    url: String,

    /// Path of the snapshot to read and rewrite.
    #[arg(long, default_value = "src/airports.json")]
    snapshot: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    update::run_update(&cli.url, &cli.snapshot)
}
