//! bayes-average: Bayesian-adjusted average ratings.
//!
//! Items with few ratings are pulled toward the mean rating of all items,
//! so a single 5-star review does not outrank hundreds of 4.5-star ones.
//!
//! - [`BayesianAverage`]: prior mean + confidence weight, the adjusted-average formula
//! - [`RatingSet`] / [`RankedCounts`]: in-memory ranking for the median-count heuristic
//! - Config-driven construction from [`bayes_core::CalculatorConfig`]

pub mod calculator;
pub mod configured;
pub mod dataset;

pub use calculator::BayesianAverage;
pub use dataset::{RankedCounts, RatedItem, RatingSet};
