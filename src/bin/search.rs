//! Launcher-facing search entry point.
//!
//! The launcher invokes this binary with the user's raw query as a single
//! positional argument and renders the JSON envelope it prints. On any
//! failure the process exits non-zero with the error on stderr and nothing
//! on stdout.

use clap::Parser;
use std::path::PathBuf;

/// Search the airport snapshot and print launcher items as JSON.
#[derive(Parser)]
#[command(
    name = "airport-search",
    about = "Search the bundled airport dataset and print launcher result items",
    version
)]
struct Cli {
    /// Free-text query. Matched case-insensitively (after NFC normalization)
    /// as a substring of each airport's name, municipality, and Japanese
    /// locality fields. An empty query matches everything, capped at 50 items.
    query: String,

    /// Path to the airport snapshot.
    #[arg(long, default_value = "airports.json")]
    snapshot: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let envelope = airport_lookup::search::run_search(&cli.snapshot, &cli.query)?;
    print!("{}", envelope);
    Ok(())
}
