//! # Airport Lookup
//!
//! A workflow-style airport lookup helper for a desktop launcher, plus the
//! updater that keeps its dataset current.
//!
//! Two batch entry points share one on-disk dataset:
//!
//! ```text
//! ┌──────────────┐        ┌───────────────┐        ┌──────────────┐
//! │ OurAirports  │──CSV──▶│ airport-update │──────▶│ airports.json │
//! │ (upstream)   │        │ (merge)        │        │ (snapshot)    │
//! └──────────────┘        └───────────────┘        └──────┬───────┘
//!                                                         │
//!                                                         ▼
//!                                                  ┌───────────────┐
//!                                                  │ airport-search │──▶ {"items": [...]}
//!                                                  └───────────────┘
//! ```
//!
//! The updater downloads the upstream CSV, joins it against the existing
//! snapshot on IATA code, and preserves hand-curated Japanese locality
//! fields (`country_jp`, `state_jp`, `city_jp`) that upstream does not
//! carry. The searcher scans the snapshot with NFC + lowercase substring
//! matching and emits up to 50 launcher items.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Snapshot record schema and item derivations |
//! | [`countries`] | ISO alpha-2 → Japanese country name table |
//! | [`snapshot`] | Snapshot load and atomic save |
//! | [`search`] | Query normalization, scan, launcher envelope |
//! | [`update`] | CSV fetch, merge against the prior snapshot, persist |

pub mod countries;
pub mod models;
pub mod search;
pub mod snapshot;
pub mod update;
