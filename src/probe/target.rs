//! Per-host target prober.
//!
//! # Responsibilities
//! - Build one HTTP client per configured host (timeouts, headers, optional
//!   mutual-TLS client identity)
//! - Issue the GET probe and classify the result into a [`ProbeOutcome`]
//!
//! # Design Decisions
//! - Clients are built once at startup, not per cycle; host config is
//!   immutable for the process lifetime
//! - A client identity that fails to load is non-fatal: the host is still
//!   probed, without client auth, and a warning is logged
//! - No probe failure is an `Err`; every failure mode is a classified
//!   outcome folded into the cycle's aggregate

use std::error::Error as StdError;
use std::fs;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Identity, StatusCode};
use thiserror::Error;

use crate::config::HostConfig;
use crate::probe::outcome::{OutcomeKind, ProbeOutcome};

/// Fixed probe timeouts.
///
/// The legacy transport also set separate TLS-handshake, response-header and
/// expect-continue timeouts; those are subsumed by the overall request
/// timeout here.
#[derive(Debug, Clone, Copy)]
pub struct ProbeTimeouts {
    pub connect: Duration,
    pub request: Duration,
    pub keep_alive: Duration,
}

impl Default for ProbeTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            request: Duration::from_secs(10),
            keep_alive: Duration::from_secs(10),
        }
    }
}

/// Error loading a client certificate/key pair.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("unable to read key pair file: {0}")]
    Read(#[from] std::io::Error),

    #[error("unable to parse key pair PEM: {0}")]
    Pem(#[from] reqwest::Error),
}

/// Executes health checks against one configured host.
pub struct TargetProber {
    key: String,
    url: String,
    headers: HeaderMap,
    client: reqwest::Client,
    timeouts: ProbeTimeouts,
}

impl TargetProber {
    /// Build a prober for one host with the fixed production timeouts.
    pub fn new(key: String, host: &HostConfig, user_agent: &str) -> Result<Self, reqwest::Error> {
        Self::with_timeouts(key, host, user_agent, ProbeTimeouts::default())
    }

    /// Build a prober with explicit timeouts. Tests tighten these to keep
    /// failure scenarios fast; production uses [`ProbeTimeouts::default`].
    pub fn with_timeouts(
        key: String,
        host: &HostConfig,
        user_agent: &str,
        timeouts: ProbeTimeouts,
    ) -> Result<Self, reqwest::Error> {
        let identity = if host.uses_client_certs() {
            tracing::debug!(
                host = %key,
                cert = %host.client_cert_filename,
                cert_key = %host.client_key_filename,
                "loading client key pair for mutual TLS"
            );
            match load_identity(&host.client_cert_filename, &host.client_key_filename) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    // Chosen policy: probe anyway, without client auth.
                    tracing::warn!(host = %key, error = %e, "unable to load client key pair, probing without client auth");
                    None
                }
            }
        } else {
            None
        };

        // The legacy transport never consulted proxy environment variables.
        let mut builder = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .tcp_keepalive(timeouts.keep_alive)
            .no_proxy();

        if !user_agent.is_empty() {
            builder = builder.user_agent(user_agent);
        }
        if let Some(identity) = identity {
            builder = builder.identity(identity);
        }

        Ok(Self {
            headers: build_header_map(&key, host),
            url: host.url.clone(),
            client: builder.build()?,
            key,
            timeouts,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn request_timeout(&self) -> Duration {
        self.timeouts.request
    }

    /// Run one health check and classify the result.
    pub async fn probe(&self) -> ProbeOutcome {
        tracing::debug!(host = %self.key, url = %self.url, "probing host");

        let response = match self
            .client
            .get(&self.url)
            .headers(self.headers.clone())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let connection_refused = error_chain_is_refused(&e);
                tracing::warn!(host = %self.key, error = %e, connection_refused, "probe transport failure");
                return self.outcome(OutcomeKind::Network {
                    message: error_chain_message(&e),
                    connection_refused,
                });
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(host = %self.key, status = %status, "probe returned non-200 status");
            return self.outcome(OutcomeKind::HttpStatus(status.as_u16()));
        }

        match response.bytes().await {
            Ok(_) => {
                tracing::debug!(host = %self.key, status = %status, "probe successful");
                self.outcome(OutcomeKind::Success(status.as_u16()))
            }
            Err(e) => {
                tracing::warn!(host = %self.key, error = %e, "unable to read response body");
                self.outcome(OutcomeKind::BodyRead)
            }
        }
    }

    fn outcome(&self, kind: OutcomeKind) -> ProbeOutcome {
        ProbeOutcome {
            host_key: self.key.clone(),
            url: self.url.clone(),
            kind,
        }
    }
}

/// Read a PEM cert and key pair into one client identity.
fn load_identity(cert_path: &str, key_path: &str) -> Result<Identity, IdentityError> {
    let mut pem = fs::read(cert_path)?;
    pem.extend(fs::read(key_path)?);
    Ok(Identity::from_pem(&pem)?)
}

/// Build the per-host header map; invalid header names or values are
/// skipped with a warning rather than failing startup.
fn build_header_map(key: &str, host: &HostConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in &host.headers {
        let parsed_name = name.parse::<HeaderName>();
        let parsed_value = value.parse::<HeaderValue>();
        match (parsed_name, parsed_value) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => {
                tracing::warn!(host = %key, header = %name, "skipping invalid probe header");
            }
        }
    }
    headers
}

/// Whether any error in the source chain is a refused connection.
fn error_chain_is_refused(err: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::ConnectionRefused {
                return true;
            }
        }
        // Some transport errors only carry the refusal in their text.
        if e.to_string().to_lowercase().contains("connection refused") {
            return true;
        }
        current = e.source();
    }
    false
}

/// Flatten an error and its sources into one diagnostic line.
fn error_chain_message(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(e) = current {
        message.push_str(": ");
        message.push_str(&e.to_string());
        current = e.source();
    }
    message
}
