//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (load balancer / orchestrator poll)
//!     → server.rs (Axum router, trace + timeout layers)
//!     → status store snapshot
//!     → 200/503 + JSON payload + newline
//! ```

pub mod server;

pub use server::HttpServer;
