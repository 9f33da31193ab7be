//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for member-anon using clap.

use crate::anonymization::{AnonymizationEngine, AnonymizationSummary};
use crate::config::{load_config_with_overrides, AnonConfig, ConfigOverrides};
use crate::domain::Result;
use clap::Parser;
use std::path::PathBuf;

/// member-anon - replace member ids and names in a JSON document
#[derive(Parser, Debug)]
#[command(name = "member-anon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the members JSON document
    pub path: String,

    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "MEMBER_ANON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    ///
    /// Overrides MEMBER_ANON_LOGGING_LEVEL and the config file.
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Seed for reproducible output
    ///
    /// Overrides MEMBER_ANON_ANONYMIZATION_SEED and the config file.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Loads configuration and applies command-line overrides on top
    pub fn resolve_config(&self) -> Result<AnonConfig> {
        load_config_with_overrides(self.config.as_deref(), &self.overrides())
    }

    /// Settings given as flags, applied above file and environment
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            log_level: self.log_level.clone(),
            seed: self.seed,
        }
    }

    /// Anonymizes the input file and prints the confirmation line
    pub fn execute(&self, config: &AnonConfig) -> Result<AnonymizationSummary> {
        tracing::debug!(path = %self.path, seed = ?config.anonymization.seed, "Anonymizing");

        let mut engine = AnonymizationEngine::new(config.anonymization.clone())?;
        let summary = engine.anonymize_file(&self.path)?;

        println!("{summary}");
        Ok(summary)
    }
}
