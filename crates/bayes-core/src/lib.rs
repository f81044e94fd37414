//! bayes-core: shared plumbing for the Bayesian average calculator.
//!
//! - Config: TOML-based, env > project file > defaults
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Tracing: `BAYES_LOG`-driven `EnvFilter` subscriber

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::{BayesConfig, CalculatorConfig};
pub use errors::{ConfigError, ErrorCode};
