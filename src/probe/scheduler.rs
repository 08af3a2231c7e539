//! Fixed-interval probe scheduling.
//!
//! # Responsibilities
//! - Run forever on the configured interval, one cycle per tick
//! - Fan probes out concurrently within a cycle, one task per host
//! - Join the full outcome list, aggregate, and publish
//!
//! # Design Decisions
//! - Probes within a cycle run concurrently under a per-probe deadline, so
//!   a cycle's wall-clock duration is bounded by one worst-case probe, not
//!   by the host count
//! - Hosts are probed in key order; the published message list inherits
//!   that deterministic order
//! - Shutdown is honored between cycles, never mid-cycle

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::broadcast;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::probe::outcome::{OutcomeKind, ProbeOutcome};
use crate::probe::target::TargetProber;
use crate::status::aggregate::aggregate;
use crate::status::store::StatusStore;

/// Slack added on top of the request timeout before a probe task is
/// abandoned; the client timeout is expected to fire first.
const DEADLINE_GRACE: Duration = Duration::from_secs(2);

/// Drives probe cycles and publishes each cycle's aggregate.
pub struct ProbeScheduler {
    probers: Vec<TargetProber>,
    interval: Duration,
    status: Arc<StatusStore>,
}

impl ProbeScheduler {
    /// Create a scheduler over the given probers.
    ///
    /// Probers are sorted by host key so every cycle iterates, and every
    /// published status lists, hosts in the same order.
    pub fn new(
        mut probers: Vec<TargetProber>,
        interval: Duration,
        status: Arc<StatusStore>,
    ) -> Self {
        probers.sort_by(|a, b| a.key().cmp(b.key()));
        Self {
            probers,
            interval,
            status,
        }
    }

    /// Run the perpetual probe loop until shutdown is signalled.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            hosts = self.probers.len(),
            interval_secs = self.interval.as_secs(),
            "probe scheduler starting"
        );

        // First cycle only after one full interval, as existing
        // deployments expect.
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_cycle().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("probe scheduler received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// Run exactly one cycle: probe every host, aggregate, publish.
    pub async fn run_cycle(&self) {
        tracing::info!(hosts = self.probers.len(), "checking health of configured hosts");

        let deadline = self.probe_deadline();
        let probes = self.probers.iter().map(|prober| async move {
            match tokio::time::timeout(deadline, prober.probe()).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(host = %prober.key(), "probe exceeded cycle deadline");
                    ProbeOutcome {
                        host_key: prober.key().to_string(),
                        url: prober.url().to_string(),
                        kind: OutcomeKind::Network {
                            message: format!(
                                "probe deadline of {}s exceeded",
                                deadline.as_secs()
                            ),
                            connection_refused: false,
                        },
                    }
                }
            }
        });

        let outcomes = join_all(probes).await;
        let aggregated = aggregate(&outcomes);

        tracing::info!(
            status_code = aggregated.status_code,
            errors = aggregated.error_count,
            "cycle complete, publishing status"
        );
        self.status.publish(aggregated);
    }

    fn probe_deadline(&self) -> Duration {
        self.probers
            .iter()
            .map(|p| p.request_timeout())
            .max()
            .unwrap_or_default()
            + DEADLINE_GRACE
    }
}
