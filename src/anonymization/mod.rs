//! Member anonymization
//!
//! Replaces the `id` and `name` of every member in a members document and
//! re-keys the members mapping by the new ids.
//!
//! # Pipeline
//!
//! - **Sampling**: distinct replacement ids drawn from `[0, id_space)` ([`ids`])
//! - **Names**: synthetic names chosen by id parity ([`names`])
//! - **Output**: sibling path with `-anon.json` ([`output`])
//! - **Engine**: ties the steps together over an injectable RNG ([`engine`])
//!
//! # Usage
//!
//! ```rust,no_run
//! use member_anon::anonymization::{anonymize_json, AnonymizationConfig};
//!
//! let summary = anonymize_json("team.json", &AnonymizationConfig::default())?;
//! println!("{summary}");
//! # Ok::<(), member_anon::domain::AnonError>(())
//! ```

pub mod config;
pub mod engine;
pub mod ids;
pub mod names;
pub mod output;
pub mod report;

pub use config::AnonymizationConfig;
pub use engine::AnonymizationEngine;
pub use report::AnonymizationSummary;

use crate::domain::Result;

/// Anonymizes the members document at `path`
///
/// Builds an engine from `config` (seeded if `config.seed` is set) and runs
/// it once over the file.
pub fn anonymize_json(path: &str, config: &AnonymizationConfig) -> Result<AnonymizationSummary> {
    AnonymizationEngine::new(config.clone())?.anonymize_file(path)
}
