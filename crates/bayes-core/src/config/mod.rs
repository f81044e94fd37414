//! Configuration system.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod bayes_config;
pub mod calculator_config;

pub use bayes_config::BayesConfig;
pub use calculator_config::CalculatorConfig;
