//! Observability subsystem.
//!
//! All subsystems log through `tracing`; per-probe and per-cycle
//! diagnostics are structured events, not part of the health contract.

pub mod logging;
