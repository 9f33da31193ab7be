//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AnonConfig;
use crate::domain::errors::AnonError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Values supplied on the command line
///
/// These sit above every other layer. A set field also masks the matching
/// `MEMBER_ANON_*` variable, so a bad value there cannot fail the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub seed: Option<u64>,
}

/// Loads configuration, optionally from a TOML file
///
/// Equivalent to [`load_config_with_overrides`] with no overrides.
///
/// # Examples
///
/// ```no_run
/// use member_anon::config::load_config;
/// use std::path::Path;
///
/// let config = load_config(Some(Path::new("member-anon.toml"))).expect("Failed to load config");
/// ```
pub fn load_config(path: Option<&Path>) -> Result<AnonConfig> {
    load_config_with_overrides(path, &ConfigOverrides::default())
}

/// Loads configuration and layers command-line values on top
///
/// This function:
/// 1. Reads the TOML file, if one is given
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AnonConfig (defaults when no file is given)
/// 4. Applies environment variable overrides (MEMBER_ANON_* prefix)
/// 5. Applies the command-line overrides
/// 6. Validates the merged configuration
///
/// # Errors
///
/// Returns [`AnonError::Configuration`] if:
/// - The file does not exist or cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - An override has an invalid value
/// - Validation fails
pub fn load_config_with_overrides(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<AnonConfig> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => AnonConfig::default(),
    };

    apply_env_overrides(&mut config, overrides)?;

    if let Some(ref level) = overrides.log_level {
        config.logging.level = level.clone();
    }
    if let Some(seed) = overrides.seed {
        config.anonymization.seed = Some(seed);
    }

    config.validate().map_err(|e| {
        AnonError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AnonConfig> {
    if !path.exists() {
        return Err(AnonError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AnonError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: AnonConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| AnonError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AnonError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the MEMBER_ANON_* prefix
///
/// Variables follow the pattern MEMBER_ANON_<SECTION>_<KEY>, for example
/// MEMBER_ANON_ANONYMIZATION_SEED. Variables shadowed by a command-line
/// override are not read.
fn apply_env_overrides(config: &mut AnonConfig, overrides: &ConfigOverrides) -> Result<()> {
    if let Ok(val) = std::env::var("MEMBER_ANON_ANONYMIZATION_ID_SPACE") {
        config.anonymization.id_space = val.parse().map_err(|_| {
            AnonError::Configuration(format!(
                "Invalid MEMBER_ANON_ANONYMIZATION_ID_SPACE value: {val}"
            ))
        })?;
    }
    if overrides.seed.is_none() {
        if let Ok(val) = std::env::var("MEMBER_ANON_ANONYMIZATION_SEED") {
            config.anonymization.seed = Some(val.parse().map_err(|_| {
                AnonError::Configuration(format!(
                    "Invalid MEMBER_ANON_ANONYMIZATION_SEED value: {val}"
                ))
            })?);
        }
    }

    if overrides.log_level.is_none() {
        if let Ok(val) = std::env::var("MEMBER_ANON_LOGGING_LEVEL") {
            config.logging.level = val;
        }
    }
    if let Ok(val) = std::env::var("MEMBER_ANON_LOGGING_JSON") {
        config.logging.json = val.parse().map_err(|_| {
            AnonError::Configuration(format!("Invalid MEMBER_ANON_LOGGING_JSON value: {val}"))
        })?;
    }

    Ok(())
}
