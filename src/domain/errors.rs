//! Domain error types
//!
//! All errors raised by member-anon funnel into [`AnonError`]. The variants
//! follow the failure points of a run: reading, parsing, shape checks,
//! id sampling, writing, and configuration.

use thiserror::Error;

/// Main member-anon error type
#[derive(Debug, Error)]
pub enum AnonError {
    /// Input could not be read or output could not be written
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Input is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input is valid JSON but not a members document
    #[error("Shape error: {0}")]
    Shape(String),

    /// More members than distinct ids available
    #[error("Sampling error: cannot draw {requested} distinct ids from [0, {id_space})")]
    SamplingRange { requested: usize, id_space: u32 },

    /// Output document could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AnonError {
    /// Creates an I/O error bound to the path it happened on
    pub fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        AnonError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Process exit code for this error
    ///
    /// Configuration problems exit with 2 (the same code clap uses for usage
    /// errors); everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnonError::Configuration(_) => 2,
            _ => 1,
        }
    }
}

impl From<toml::de::Error> for AnonError {
    fn from(err: toml::de::Error) -> Self {
        AnonError::Configuration(format!("TOML parse error: {err}"))
    }
}
