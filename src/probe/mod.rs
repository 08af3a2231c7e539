//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler tick (scheduler.rs):
//!     → one TargetProber per host (target.rs), fanned out concurrently
//!     → Vec<ProbeOutcome> (outcome.rs), joined in host-key order
//!     → status::aggregate → status::store (published atomically)
//! ```
//!
//! # Design Decisions
//! - One probe per host per cycle; no retries or backoff at any layer
//! - A failed probe is one recorded error for that cycle only
//! - Classification is total: every probe produces exactly one outcome

pub mod outcome;
pub mod scheduler;
pub mod target;

pub use outcome::{OutcomeKind, ProbeOutcome};
pub use scheduler::ProbeScheduler;
pub use target::{ProbeTimeouts, TargetProber};
