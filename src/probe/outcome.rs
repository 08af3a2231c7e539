//! Classified result of a single probe attempt.

/// How one probe attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    /// 200 response with a fully readable body.
    Success(u16),
    /// Response received with a non-200 status code.
    HttpStatus(u16),
    /// Transport or connection failure before a response arrived.
    Network {
        message: String,
        connection_refused: bool,
    },
    /// 200 response whose body could not be fully read.
    BodyRead,
}

/// The outcome of probing one host once within a cycle.
///
/// Created fresh each probe and consumed immediately by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Host key from the configuration.
    pub host_key: String,
    /// URL that was probed, echoed into status messages.
    pub url: String,
    pub kind: OutcomeKind,
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.kind, OutcomeKind::Success(_))
    }
}
