//! Aggregated status subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<ProbeOutcome> (one cycle)
//!     → aggregate.rs (messages, error count, verdict, timestamp)
//!     → AggregatedStatus (immutable)
//!     → store.rs (atomic swap, single writer / many readers)
//!     → http::server handlers (snapshot reads)
//! ```

pub mod aggregate;
pub mod store;

pub use aggregate::{aggregate, AggregatedStatus};
pub use store::StatusStore;
