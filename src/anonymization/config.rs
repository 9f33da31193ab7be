//! Anonymization configuration

use crate::domain::{AnonError, Result};
use serde::{Deserialize, Serialize};

/// Exclusive upper bound of replacement ids unless configured otherwise
pub const DEFAULT_ID_SPACE: u32 = 1_000_000;

/// Settings for a single anonymization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Replacement ids are drawn from `[0, id_space)`
    #[serde(default = "default_id_space")]
    pub id_space: u32,

    /// Fixed RNG seed; `None` seeds from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_id_space() -> u32 {
    DEFAULT_ID_SPACE
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            id_space: default_id_space(),
            seed: None,
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.id_space == 0 {
            return Err(AnonError::Configuration(
                "anonymization.id_space must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
