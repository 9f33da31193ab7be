//! Main anonymization engine
//!
//! [`AnonymizationEngine`] re-keys the members of a [`Document`]: every member
//! gets a fresh id drawn without replacement, a synthetic name chosen by the
//! parity of that id, and is stored under the new id. Other fields are left
//! alone.
//!
//! # Examples
//!
//! ```no_run
//! use member_anon::anonymization::{AnonymizationConfig, AnonymizationEngine};
//!
//! # fn example() -> member_anon::domain::Result<()> {
//! let mut engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let summary = engine.anonymize_file("team.json")?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

use crate::anonymization::{
    config::AnonymizationConfig, ids::sample_ids, names::synthetic_name, output::output_path,
    report::AnonymizationSummary,
};
use crate::domain::{AnonError, Document, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;

/// Main anonymization engine
///
/// Generic over its random source so callers can inject a seeded generator.
/// [`AnonymizationEngine::new`] picks a [`StdRng`] seeded from the
/// configuration, or from OS entropy when no seed is set.
pub struct AnonymizationEngine<R = StdRng> {
    config: AnonymizationConfig,
    rng: R,
}

impl AnonymizationEngine<StdRng> {
    /// Create a new anonymization engine
    ///
    /// # Errors
    ///
    /// Returns [`AnonError::Configuration`] if the configuration is invalid.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> AnonymizationEngine<R> {
    /// Create an engine that draws from the given random source
    ///
    /// The `seed` field of the configuration is ignored here.
    pub fn with_rng(config: AnonymizationConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Replaces every member's id and name and re-keys the members mapping
    ///
    /// Returns the number of members processed. On error the document is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AnonError::SamplingRange`] if the document has at least
    /// `id_space` members.
    pub fn anonymize_document(&mut self, document: &mut Document) -> Result<usize> {
        let count = document.member_count();
        let ids = sample_ids(&mut self.rng, count, self.config.id_space)?;
        tracing::debug!(
            members = count,
            id_space = self.config.id_space,
            "Drew replacement ids"
        );

        let rng = &mut self.rng;
        let members = document
            .take_members()
            .into_iter()
            .zip(ids)
            .map(|((_, mut member), id)| {
                member.set_id(id);
                member.set_name(synthetic_name(id, rng));
                (id.to_string(), member)
            })
            .collect();
        document.set_members(members);

        Ok(count)
    }

    /// Anonymizes the document at `path` and writes it next to the input
    ///
    /// The output path replaces the first `.json` in `path` with
    /// `-anon.json`. Nothing is written unless reading, parsing and
    /// anonymizing all succeed.
    ///
    /// # Errors
    ///
    /// - [`AnonError::Io`] if the input cannot be read or the output written
    /// - [`AnonError::Parse`] if the input is not JSON
    /// - [`AnonError::Shape`] if the input is not a members document
    /// - [`AnonError::SamplingRange`] if there are too many members
    pub fn anonymize_file(&mut self, path: &str) -> Result<AnonymizationSummary> {
        let contents = fs::read_to_string(path).map_err(|e| AnonError::io(path, e))?;
        let mut document = Document::from_json_str(&contents)?;
        tracing::debug!(
            path = %path,
            members = document.member_count(),
            "Loaded members document"
        );

        let members = self.anonymize_document(&mut document)?;

        let output = output_path(path);
        let summary = AnonymizationSummary::new(path, output, members);
        if summary.overwrote_input {
            tracing::warn!(
                path = %path,
                "Input path contains no '.json'; overwriting the input file"
            );
        }

        let json = document.into_pretty_json()?;
        fs::write(&summary.output_path, json)
            .map_err(|e| AnonError::io(summary.output_path.as_str(), e))?;

        tracing::info!(
            input = %summary.input_path,
            output = %summary.output_path,
            members = summary.members,
            "Wrote anonymized document"
        );

        Ok(summary)
    }
}
