//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build probers → Spawn scheduler → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → scheduler exits between cycles,
//!     endpoint drains in-flight requests
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
