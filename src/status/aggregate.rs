//! Folding one cycle's outcomes into a single published verdict.
//!
//! # Responsibilities
//! - Render one status message per probed host (legacy wire format)
//! - Count the cycle's errors and derive the 200/503 verdict
//! - Stamp the aggregate with the cycle's completion time
//!
//! # Design Decisions
//! - The verdict reflects the cycle just completed; the legacy off-by-one
//!   between status text and error counter is deliberately not preserved
//! - Messages keep the exact legacy text, including the trailing "; "
//!   separator after each entry, since downstream monitors parse it

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::probe::outcome::{OutcomeKind, ProbeOutcome};

/// The single published verdict for the most recently completed cycle.
///
/// Replaced wholesale at the end of each cycle, never field-mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedStatus {
    /// 200 when every probe succeeded, 503 otherwise.
    pub status_code: u16,
    /// "healthy" or "unhealthy", consistent with `status_code`.
    pub status_text: &'static str,
    /// Number of non-success outcomes in the cycle.
    pub error_count: usize,
    /// Concatenated per-host messages in host-key order.
    pub host_statuses: String,
    /// Completion time of the cycle, `YYYY-MM-DD HH:MM:SS +0000 UTC`.
    pub time: String,
}

/// Serialized body of the health endpoint, all fields strings as the
/// legacy consumers expect.
#[derive(Debug, Serialize)]
pub struct StatusPayload<'a> {
    #[serde(rename = "statusCode")]
    status_code: String,
    #[serde(rename = "statusText")]
    status_text: &'a str,
    #[serde(rename = "hostStatuses")]
    host_statuses: &'a str,
    time: &'a str,
}

impl AggregatedStatus {
    /// Placeholder published before the first cycle completes.
    pub fn unchecked() -> Self {
        Self {
            status_code: 200,
            status_text: "healthy",
            error_count: 0,
            host_statuses: String::new(),
            time: format_time(Utc::now()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.error_count == 0
    }

    pub fn payload(&self) -> StatusPayload<'_> {
        StatusPayload {
            status_code: self.status_code.to_string(),
            status_text: self.status_text,
            host_statuses: &self.host_statuses,
            time: &self.time,
        }
    }
}

/// Fold an ordered list of outcomes into one aggregate.
pub fn aggregate(outcomes: &[ProbeOutcome]) -> AggregatedStatus {
    let error_count = outcomes.iter().filter(|o| !o.is_success()).count();

    let mut host_statuses = String::new();
    for outcome in outcomes {
        host_statuses.push_str(&status_message(outcome));
        host_statuses.push_str("; ");
    }

    let (status_code, status_text) = if error_count > 0 {
        (503, "unhealthy")
    } else {
        (200, "healthy")
    };

    AggregatedStatus {
        status_code,
        status_text,
        error_count,
        host_statuses,
        time: format_time(Utc::now()),
    }
}

/// Render the legacy per-host status message for one outcome.
fn status_message(outcome: &ProbeOutcome) -> String {
    match &outcome.kind {
        OutcomeKind::Success(code) => format!(
            "{} successful query to: [{}] ({})",
            outcome.host_key, outcome.url, code
        ),
        OutcomeKind::HttpStatus(code) => format!("{} ERROR from: [{}]", code, outcome.url),
        OutcomeKind::Network {
            connection_refused: true,
            ..
        } => format!(
            "{} (ECONNREFUSED) Connection Refused: Server is offline or not responding",
            outcome.host_key
        ),
        OutcomeKind::Network { message, .. } => {
            format!("{} {}", outcome.host_key, message)
        }
        OutcomeKind::BodyRead => format!(
            "{} Unable to get response body from: [{}]",
            outcome.host_key, outcome.url
        ),
    }
}

fn format_time(t: DateTime<Utc>) -> String {
    format!("{} +0000 UTC", t.format("%Y-%m-%d %H:%M:%S"))
}
