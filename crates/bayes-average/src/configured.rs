//! Config-driven construction.

use bayes_core::config::CalculatorConfig;

use crate::calculator::BayesianAverage;
use crate::dataset::RatingSet;

impl BayesianAverage {
    /// Build from rating totals, then apply configured overrides.
    ///
    /// A configured `prior_mean` replaces the derived one; the confidence
    /// weight is the configured value or the default `1`.
    pub fn from_config(config: &CalculatorConfig, total_count: f64, total_sum: f64) -> Self {
        let mut calc = Self::new(total_count, total_sum);
        calc.set_confidence_weight(config.effective_confidence_weight());
        if let Some(prior_mean) = config.prior_mean {
            calc.set_prior_mean(prior_mean);
        }
        calc
    }
}

impl RatingSet {
    /// Calculator for this dataset honouring `config`.
    ///
    /// The median-count heuristic runs unless it is disabled or an explicit
    /// confidence weight is configured.
    pub fn calculator_with(&self, config: &CalculatorConfig) -> BayesianAverage {
        let mut calc =
            BayesianAverage::from_config(config, self.total_count() as f64, self.total_sum());
        if config.effective_derive_weight() {
            self.derive_weight_into(&mut calc);
        }
        tracing::debug!(
            prior_mean = calc.prior_mean(),
            confidence_weight = calc.confidence_weight(),
            items = self.len(),
            "configured calculator"
        );
        calc
    }
}
