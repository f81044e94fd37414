//! Error handling for the calculator workspace.
//! `thiserror` only. The calculator itself never fails; errors come from
//! loading and validating configuration.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
