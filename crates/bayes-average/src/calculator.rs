//! Bayesian average: blend an item's observed average toward a prior mean.
//!
//! ```text
//! adjusted = (avg × count + C × m) / (count + C)
//! ```
//!
//! `m` is the mean rating across all elements, `C` the confidence weight
//! (how many virtual prior observations are blended in). Both divisions in
//! this module fall back to `0` instead of producing NaN/∞ when the
//! denominator is exactly zero.

use serde::{Deserialize, Serialize};

use bayes_core::config::calculator_config::DEFAULT_CONFIDENCE_WEIGHT;

/// Bayesian average calculator.
///
/// Holds the prior mean and confidence weight. Setters return `&mut Self`
/// so configuration calls can be chained. No value is validated; the
/// rating scale is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BayesianAverage {
    total_count: f64,
    total_sum: f64,
    prior_mean: f64,
    confidence_weight: f64,
}

impl BayesianAverage {
    /// Create a calculator from the number and sum of all ratings across
    /// every element. The prior mean is derived once, here.
    pub fn new(total_count: f64, total_sum: f64) -> Self {
        let mut calc = Self {
            total_count,
            total_sum,
            prior_mean: 0.0,
            confidence_weight: DEFAULT_CONFIDENCE_WEIGHT,
        };
        calc.prior_mean = calc.derive_prior_mean();
        calc
    }

    /// Arithmetic mean of all ratings: `total_sum / total_count`, or `0`
    /// when there are no ratings.
    ///
    /// Recomputed from the construction totals on every call, regardless
    /// of any later [`set_prior_mean`](Self::set_prior_mean).
    pub fn derive_prior_mean(&self) -> f64 {
        if self.total_count == 0.0 {
            tracing::trace!(total_sum = self.total_sum, "zero total count, prior mean falls back to 0");
            return 0.0;
        }
        self.total_sum / self.total_count
    }

    pub fn set_prior_mean(&mut self, prior_mean: f64) -> &mut Self {
        self.prior_mean = prior_mean;
        self
    }

    pub fn prior_mean(&self) -> f64 {
        self.prior_mean
    }

    pub fn set_confidence_weight(&mut self, confidence_weight: f64) -> &mut Self {
        self.confidence_weight = confidence_weight;
        self
    }

    pub fn confidence_weight(&self) -> f64 {
        self.confidence_weight
    }

    /// Derive the confidence weight from a dataset of `n` elements using the
    /// median rating-count heuristic.
    ///
    /// ```text
    /// last = n even ? n/2 - 1 : (n-1)/2 - 1
    /// C    = last even ? even(last) : odd(last)
    /// ```
    ///
    /// The suppliers see elements ranked ascending by rating count:
    /// - `even(p)` returns the count at rank `p / 2`;
    /// - `odd(p)` returns the mean of the counts at ranks `(p + 1) / 2` and
    ///   `(p - 1) / 2`.
    ///
    /// For `n <= 1`, `last` is negative and is handed to `odd` as is.
    pub fn derive_confidence_weight<E, O>(&mut self, n: i64, even: E, odd: O) -> &mut Self
    where
        E: FnOnce(i64) -> f64,
        O: FnOnce(i64) -> f64,
    {
        let last = last_median_position(n);
        let weight = if last % 2 == 0 { even(last) } else { odd(last) };
        tracing::debug!(n, last, weight, "derived confidence weight");
        self.confidence_weight = weight;
        self
    }

    /// Bayesian-adjusted average for one item with `observed_count` ratings
    /// averaging `observed_average`.
    ///
    /// Returns `0` when `observed_count + confidence_weight` is exactly zero.
    pub fn adjusted_average(&self, observed_average: f64, observed_count: f64) -> f64 {
        let denominator = observed_count + self.confidence_weight;
        if denominator == 0.0 {
            tracing::trace!(
                observed_count,
                confidence_weight = self.confidence_weight,
                "zero denominator, adjusted average falls back to 0"
            );
            return 0.0;
        }
        (observed_average * observed_count + self.confidence_weight * self.prior_mean) / denominator
    }
}

impl Default for BayesianAverage {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Position just before the midpoint of `n` ranked elements.
pub(crate) fn last_median_position(n: i64) -> i64 {
    if n % 2 == 0 {
        n / 2 - 1
    } else {
        (n - 1) / 2 - 1
    }
}
