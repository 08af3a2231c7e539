//! azhealthcheck: aggregated availability-zone health endpoint.
//!
//! Periodically probes a fixed set of HTTP(S) endpoints, optionally
//! authenticating with per-host mutual-TLS client certificates, and exposes
//! one aggregated 200/503 verdict for a load balancer to poll.
//!
//! ```text
//! scheduler tick ──▶ probe ──▶ probe ──▶ ... (concurrent, join barrier)
//!                      └──────────┬─────────┘
//!                          Vec<ProbeOutcome>
//!                                 ▼
//!                       status::aggregate
//!                                 ▼
//!                    StatusStore (atomic swap) ◀── GET / (axum handlers)
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod probe;
pub mod status;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::HealthcheckConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use probe::ProbeScheduler;
pub use status::StatusStore;
