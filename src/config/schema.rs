//! Configuration schema types

use crate::anonymization::AnonymizationConfig;
use crate::domain::AnonError;
use crate::logging::parse_log_level;
use serde::{Deserialize, Serialize};

/// Main member-anon configuration
///
/// Root of the optional TOML file. Every section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnonConfig {
    /// Anonymization settings
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AnonConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.anonymization.validate().map_err(validation_message)?;
        self.logging.validate()?;
        Ok(())
    }
}

fn validation_message(err: AnonError) -> String {
    match err {
        AnonError::Configuration(message) => message,
        other => other.to_string(),
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Validates logging configuration
    pub fn validate(&self) -> Result<(), String> {
        parse_log_level(&self.level)
            .map(|_| ())
            .map_err(validation_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config: AnonConfig = toml::from_str("").unwrap();
        assert_eq!(config, AnonConfig::default());
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_toml() {
        let config: AnonConfig = toml::from_str(
            r#"
[anonymization]
id_space = 5000
seed = 12

[logging]
level = "debug"
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.anonymization.id_space, 5000);
        assert_eq!(config.anonymization.seed, Some(12));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AnonConfig::default();
        config.logging.level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log level"));
    }

    #[test]
    fn test_invalid_id_space() {
        let mut config = AnonConfig::default();
        config.anonymization.id_space = 0;
        assert!(config.validate().is_err());
    }
}
