//! Calculator configuration.

use serde::{Deserialize, Serialize};

/// Default confidence weight when nothing is configured or derived.
pub const DEFAULT_CONFIDENCE_WEIGHT: f64 = 1.0;

/// Overrides applied on top of a calculator built from rating totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Fixed prior mean. When unset the mean is derived from totals.
    pub prior_mean: Option<f64>,
    /// Fixed confidence weight. When set, the median heuristic is skipped.
    pub confidence_weight: Option<f64>,
    /// Run the median-count heuristic on datasets. Default: true.
    pub derive_weight_from_median: Option<bool>,
}

impl CalculatorConfig {
    /// Returns whether the median-count heuristic should run, defaulting to true.
    ///
    /// An explicit `confidence_weight` always wins over the heuristic.
    pub fn effective_derive_weight(&self) -> bool {
        self.confidence_weight.is_none() && self.derive_weight_from_median.unwrap_or(true)
    }

    /// Returns the effective confidence weight, defaulting to 1.
    pub fn effective_confidence_weight(&self) -> f64 {
        self.confidence_weight.unwrap_or(DEFAULT_CONFIDENCE_WEIGHT)
    }
}
