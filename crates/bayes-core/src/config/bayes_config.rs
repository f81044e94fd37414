//! Top-level configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CalculatorConfig;
use crate::errors::ConfigError;

/// Project config file name, looked up in the root passed to [`BayesConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "bayes.toml";

pub const ENV_PRIOR_MEAN: &str = "BAYES_PRIOR_MEAN";
pub const ENV_CONFIDENCE_WEIGHT: &str = "BAYES_CONFIDENCE_WEIGHT";
pub const ENV_DERIVE_WEIGHT_FROM_MEDIAN: &str = "BAYES_DERIVE_WEIGHT_FROM_MEDIAN";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BAYES_*`)
/// 2. Project config (`bayes.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BayesConfig {
    pub calculator: CalculatorConfig,
}

impl BayesConfig {
    /// Load configuration with 3-layer resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// The calculator accepts any real number, but NaN or infinite values
    /// read from files or the environment are always a mistake.
    pub fn validate(config: &BayesConfig) -> Result<(), ConfigError> {
        let calc = &config.calculator;
        for (field, value) in [
            ("calculator.prior_mean", calc.prior_mean),
            ("calculator.confidence_weight", calc.confidence_weight),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("must be a finite number, got {v}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut BayesConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BayesConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut BayesConfig, other: &BayesConfig) {
        if other.calculator.prior_mean.is_some() {
            base.calculator.prior_mean = other.calculator.prior_mean;
        }
        if other.calculator.confidence_weight.is_some() {
            base.calculator.confidence_weight = other.calculator.confidence_weight;
        }
        if other.calculator.derive_weight_from_median.is_some() {
            base.calculator.derive_weight_from_median =
                other.calculator.derive_weight_from_median;
        }
    }

    /// Apply environment variable overrides. Unparseable values are skipped.
    fn apply_env_overrides(config: &mut BayesConfig) {
        if let Some(v) = env_value::<f64>(ENV_PRIOR_MEAN) {
            config.calculator.prior_mean = Some(v);
        }
        if let Some(v) = env_value::<f64>(ENV_CONFIDENCE_WEIGHT) {
            config.calculator.confidence_weight = Some(v);
        }
        if let Some(v) = env_value::<bool>(ENV_DERIVE_WEIGHT_FROM_MEDIAN) {
            config.calculator.derive_weight_from_median = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
