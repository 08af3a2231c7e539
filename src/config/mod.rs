//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! azhealthcheck.yaml
//!     → loader.rs (locate, parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → HealthcheckConfig (validated, immutable)
//!     → consumed once at startup by prober/scheduler/endpoint
//! ```
//!
//! # Design Decisions
//! - Config is immutable for the process lifetime; no reload path
//! - All scalar fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, locate_config, ConfigError};
pub use schema::{HealthcheckConfig, HostConfig};
