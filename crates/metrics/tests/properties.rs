//! Property tests for the regression metrics.
//!
//! Checks invariants that must hold for any finite input:
//! - RMSE is non-negative and zero on identical inputs
//! - R2 never exceeds one and is exactly one on identical inputs
//! - The default MSE variant reports the same score as RMSE
//! - Mismatched lengths fail for every metric, after being observed

use proptest::collection::vec;
use proptest::prelude::*;

use regscore_metrics::{Config, Evaluator, Event, Metric, MseForm};

// =============================================================================
// Strategy Helpers
// =============================================================================

fn value() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

/// Generate ground truth and predictions with the same length.
fn pair(len: std::ops::Range<usize>) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    len.prop_flat_map(|l| (vec(value(), l), vec(value(), l)))
}

// =============================================================================
// Score Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn prop_rmse_non_negative((y_true, y_pred) in pair(1..64)) {
        let rmse = Metric::Rmse.calculate_scores_unobserved(&y_true, &y_pred).unwrap();
        prop_assert!(rmse >= 0.0, "RMSE {} is negative", rmse);
        prop_assert!(rmse.is_finite());
    }

    #[test]
    fn prop_rmse_zero_on_identical(y in vec(value(), 1..64)) {
        let rmse = Metric::Rmse.calculate_scores_unobserved(&y, &y).unwrap();
        prop_assert_eq!(rmse, 0.0);
    }

    #[test]
    fn prop_r2_one_on_identical(y in vec(value(), 2..64)) {
        let r2 = Metric::R2.calculate_scores_unobserved(&y, &y).unwrap();
        prop_assert_eq!(r2, 1.0);
    }

    #[test]
    fn prop_r2_at_most_one((y_true, y_pred) in pair(2..64)) {
        let r2 = Metric::R2.calculate_scores_unobserved(&y_true, &y_pred).unwrap();
        prop_assert!(r2 <= 1.0, "R2 {} exceeds 1", r2);
    }

    #[test]
    fn prop_default_mse_equals_rmse((y_true, y_pred) in pair(1..64)) {
        let mse = Metric::Mse.calculate_scores_unobserved(&y_true, &y_pred).unwrap();
        let rmse = Metric::Rmse.calculate_scores_unobserved(&y_true, &y_pred).unwrap();
        prop_assert_eq!(mse, rmse);
    }

    #[test]
    fn prop_squared_mse_is_rmse_squared((y_true, y_pred) in pair(1..64)) {
        let squared =
            Evaluator::new(Metric::Mse, Config::default().with_mse_form(MseForm::Squared));

        let mse = squared.calculate_scores_unobserved(&y_true, &y_pred).unwrap();
        let rmse = Metric::Rmse.calculate_scores_unobserved(&y_true, &y_pred).unwrap();

        prop_assert!((mse - rmse * rmse).abs() <= 1e-9 * mse.max(1.0));
    }

    #[test]
    fn prop_mismatched_lengths_fail_after_observing(
        y_true in vec(value(), 0..32),
        y_pred in vec(value(), 0..32),
    ) {
        prop_assume!(y_true.len() != y_pred.len());

        for metric in Metric::ALL {
            let mut failures = 0;
            let mut observer = |event: &Event<'_>| {
                if event.is_failure() {
                    failures += 1;
                }
            };

            let result = metric.calculate_scores(&y_true, &y_pred, &mut observer);

            prop_assert!(result.is_err());
            prop_assert_eq!(failures, 1);
        }
    }
}
