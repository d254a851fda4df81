//! attack-path-core: shared foundation for the attack-path analyzer.
//!
//! - Errors: one `thiserror` enum per subsystem plus structured error codes
//! - Config: TOML-based layered configuration
//! - Tracing: `tracing-subscriber` setup driven by `ATTACK_PATH_LOG`
//! - Types: performance-oriented collection aliases

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::AttackPathConfig;
pub use errors::{AttackErrorCode, GraphError, PipelineError};
