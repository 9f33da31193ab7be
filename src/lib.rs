// member-anon - JSON member anonymizer
// Copyright (c) 2025 member-anon Contributors
// Licensed under the MIT License

//! # member-anon
//!
//! Replaces the identifying fields of every member in a JSON document so the
//! file can be shared as sample data.
//!
//! ## Overview
//!
//! Input is a JSON object with a `members` mapping:
//!
//! ```json
//! {"members": {"a": {"id": 1, "name": "X", "role": "admin"}}}
//! ```
//!
//! Each member gets a fresh integer id drawn without replacement from
//! `[0, 1_000_000)`, a synthetic name (full name for even ids, first name for
//! odd ids), and is re-keyed under the new id. Other fields are untouched.
//! The result is written to the input path with `.json` replaced by
//! `-anon.json`.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Id sampling, name generation, and the engine
//! - [`domain`] - Document model and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use member_anon::anonymization::{AnonymizationConfig, AnonymizationEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AnonymizationConfig {
//!     seed: Some(42),
//!     ..AnonymizationConfig::default()
//! };
//! let mut engine = AnonymizationEngine::new(config)?;
//! let summary = engine.anonymize_file("team.json")?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::Result`], whose error type is
//! [`domain::AnonError`].

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
