//! Logging and observability
//!
//! Structured logging through `tracing`, written to stderr:
//! - Human-readable or JSON-formatted output
//! - Configurable log levels, with `RUST_LOG` taking precedence
//!
//! # Example
//!
//! ```no_run
//! use member_anon::config::LoggingConfig;
//! use member_anon::logging::init_logging;
//!
//! init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
//! tracing::info!(members = 2, "Wrote anonymized document");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level};
