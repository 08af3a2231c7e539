//! Configuration loading from disk.
//!
//! The config file is searched for in the locations existing deployments
//! expect: `/etc/azhealthcheck.yaml` first, then `./azhealthcheck.yaml`.
//! A missing or unparseable file is fatal; the core never starts on a
//! partial configuration.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::HealthcheckConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Well-known config file name.
pub const CONFIG_FILE_NAME: &str = "azhealthcheck.yaml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    let mut out = String::new();
    for (i, err) in errors.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", err);
    }
    out
}

/// Search the conventional locations for the config file.
pub fn locate_config() -> Option<PathBuf> {
    let system = PathBuf::from("/etc").join(CONFIG_FILE_NAME);
    if system.is_file() {
        return Some(system);
    }
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    None
}

/// Parse and validate configuration from YAML text.
pub fn parse_config(yaml: &str) -> Result<HealthcheckConfig, ConfigError> {
    let config: HealthcheckConfig = serde_yaml::from_str(yaml)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a YAML file.
pub fn load_config(path: &Path) -> Result<HealthcheckConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
