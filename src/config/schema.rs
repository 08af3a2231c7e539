//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! healthcheck daemon. All types derive Serde traits for deserialization
//! from the YAML config file; field names mirror the wire format consumed
//! by existing deployments (`browserAgent`, `checkInterval`, ...).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration for the healthcheck daemon.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthcheckConfig {
    /// User-Agent presented by the prober on outbound requests.
    #[serde(rename = "browserAgent")]
    pub browser_agent: String,

    /// Service name reported to external monitoring; metadata only.
    pub check_mk_service_name: String,

    /// Seconds between probe cycles.
    #[serde(rename = "checkInterval")]
    pub check_interval: u64,

    /// TCP port the health endpoint listens on.
    pub port: u16,

    /// Hosts to probe, keyed by a short identifier used in status messages.
    pub hosts: HashMap<String, HostConfig>,
}

impl Default for HealthcheckConfig {
    fn default() -> Self {
        Self {
            browser_agent: String::new(),
            check_mk_service_name: String::new(),
            check_interval: 3,
            port: 3000,
            hosts: HashMap::new(),
        }
    }
}

/// One probed host.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    /// Human-readable name, used only in logs.
    pub name: String,

    /// URL to probe with a GET request.
    pub url: String,

    /// Extra headers set verbatim on the probe request.
    pub headers: HashMap<String, String>,

    /// Path to a PEM client certificate for mutual TLS.
    #[serde(rename = "clientcertfilename")]
    pub client_cert_filename: String,

    /// Path to the matching PEM private key.
    #[serde(rename = "clientkeyfilename")]
    pub client_key_filename: String,
}

impl HostConfig {
    /// A client identity is attempted only when both paths are non-empty.
    pub fn uses_client_certs(&self) -> bool {
        !self.client_cert_filename.is_empty() && !self.client_key_filename.is_empty()
    }
}
