//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every host URL parses and uses an HTTP scheme
//! - Reject half-configured client identities (cert without key)
//! - Validate value ranges (interval > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: HealthcheckConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use url::Url;

use crate::config::schema::HealthcheckConfig;

/// One semantic problem found in a parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No hosts configured; the daemon would publish a vacuous verdict.
    NoHosts,
    /// A host entry has an empty URL.
    EmptyUrl(String),
    /// A host URL failed to parse or uses an unsupported scheme.
    InvalidUrl { host: String, url: String, reason: String },
    /// Only one of cert/key is set for a host.
    UnpairedClientCert(String),
    /// checkInterval must be at least one second.
    ZeroInterval,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoHosts => write!(f, "no hosts configured"),
            ValidationError::EmptyUrl(host) => write!(f, "host '{}' has an empty url", host),
            ValidationError::InvalidUrl { host, url, reason } => {
                write!(f, "host '{}' has invalid url '{}': {}", host, url, reason)
            }
            ValidationError::UnpairedClientCert(host) => write!(
                f,
                "host '{}' sets only one of clientcertfilename/clientkeyfilename",
                host
            ),
            ValidationError::ZeroInterval => write!(f, "checkInterval must be greater than zero"),
        }
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &HealthcheckConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.check_interval == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    if config.hosts.is_empty() {
        errors.push(ValidationError::NoHosts);
    }

    for (key, host) in &config.hosts {
        if host.url.is_empty() {
            errors.push(ValidationError::EmptyUrl(key.clone()));
        } else {
            match Url::parse(&host.url) {
                Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
                Ok(url) => errors.push(ValidationError::InvalidUrl {
                    host: key.clone(),
                    url: host.url.clone(),
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                }),
                Err(e) => errors.push(ValidationError::InvalidUrl {
                    host: key.clone(),
                    url: host.url.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        let cert_set = !host.client_cert_filename.is_empty();
        let key_set = !host.client_key_filename.is_empty();
        if cert_set != key_set {
            errors.push(ValidationError::UnpairedClientCert(key.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
