//! Configuration management for member-anon.
//!
//! Configuration is optional: with no file, defaults apply. A TOML file may
//! set any subset of the sections below, and `MEMBER_ANON_*` environment
//! variables override the file. Command-line flags override both, and a
//! variable whose setting is also given as a flag is ignored.
//!
//! # Example Configuration
//!
//! ```toml
//! [anonymization]
//! id_space = 1000000
//! seed = ${ANON_SEED}
//!
//! [logging]
//! level = "info"
//! json = false
//! ```
//!
//! `${VAR_NAME}` placeholders are substituted from the environment before
//! parsing.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_with_overrides, ConfigOverrides};
pub use schema::{AnonConfig, LoggingConfig};
