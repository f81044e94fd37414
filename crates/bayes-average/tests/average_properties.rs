//! Property tests for the adjusted-average formula.

use bayes_average::BayesianAverage;
use proptest::prelude::*;

fn calc(prior_mean: f64, confidence_weight: f64) -> BayesianAverage {
    let mut c = BayesianAverage::default();
    c.set_prior_mean(prior_mean)
        .set_confidence_weight(confidence_weight);
    c
}

proptest! {
    #[test]
    fn getters_return_what_was_set(prior in -1e6f64..1e6, weight in -1e6f64..1e6) {
        let c = calc(prior, weight);
        prop_assert_eq!(c.prior_mean(), prior);
        prop_assert_eq!(c.confidence_weight(), weight);
    }

    #[test]
    fn zero_denominator_yields_zero(average in -10.0f64..10.0, count in 0u32..10_000, prior in 0.0f64..5.0) {
        let count = count as f64;
        let c = calc(prior, -count);
        prop_assert_eq!(c.adjusted_average(average, count), 0.0);
    }

    #[test]
    fn result_lies_between_prior_and_average(
        average in 0.0f64..5.0,
        count in 1u32..10_000,
        prior in 0.0f64..5.0,
        weight in 0.0f64..1_000.0,
    ) {
        let adjusted = calc(prior, weight).adjusted_average(average, count as f64);
        let (lo, hi) = if average < prior { (average, prior) } else { (prior, average) };
        prop_assert!(adjusted >= lo - 1e-9 && adjusted <= hi + 1e-9,
            "{} not in [{}, {}]", adjusted, lo, hi);
    }

    #[test]
    fn more_observations_pull_toward_average(
        average in 0.0f64..5.0,
        prior in 0.0f64..5.0,
        weight in 0.1f64..1_000.0,
        count in 1u32..1_000,
    ) {
        let c = calc(prior, weight);
        let near = (c.adjusted_average(average, count as f64) - average).abs();
        let nearer = (c.adjusted_average(average, count as f64 * 10.0) - average).abs();
        prop_assert!(nearer <= near + 1e-9);
    }

    #[test]
    fn zero_count_yields_prior(average in 0.0f64..5.0, prior in 0.0f64..5.0, weight in 0.1f64..1_000.0) {
        let adjusted = calc(prior, weight).adjusted_average(average, 0.0);
        prop_assert!((adjusted - prior).abs() < 1e-9);
    }

    #[test]
    fn zero_total_count_never_faults(sum in -1e6f64..1e6) {
        let c = BayesianAverage::new(0.0, sum);
        prop_assert_eq!(c.derive_prior_mean(), 0.0);
        prop_assert_eq!(c.prior_mean(), 0.0);
    }
}

#[test]
fn huge_count_converges_to_average() {
    let c = calc(3.5, 100.0);
    let adjusted = c.adjusted_average(4.9, 1e12);
    assert!((adjusted - 4.9).abs() < 1e-9);
}
