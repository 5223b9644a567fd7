//! Metric formulas over validated prediction pairs.
//!
//! These functions do no observing or input checking beyond what
//! [`PredictionPair`] already guarantees. Use [`Metric`](crate::Metric) or
//! [`Evaluator`](crate::Evaluator) for the observed entry points.

use regscore_core::PredictionPair;

/// Mean of squared differences between predictions and ground truth.
#[must_use]
pub fn mean_squared_error(pair: &PredictionPair<'_>) -> f64 {
    sum_squared_residuals(pair) / pair.len() as f64
}

/// Square root of [`mean_squared_error`].
#[must_use]
pub fn root_mean_squared_error(pair: &PredictionPair<'_>) -> f64 {
    mean_squared_error(pair).sqrt()
}

/// Coefficient of determination, `1 - SS_res / SS_tot`.
///
/// A perfect prediction scores `1.0`. Predictions worse than always guessing
/// the mean of `y_true` score below zero.
///
/// When `y_true` is constant `SS_tot` is zero. With `force_finite` the score is
/// `1.0` for a perfect prediction and `0.0` otherwise; without it the raw
/// ratio is returned.
///
/// R2 is not well-defined for a single sample, which scores `NaN`.
#[must_use]
pub fn r2_score(pair: &PredictionPair<'_>, force_finite: bool) -> f64 {
    let n = pair.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean = pair.y_true().iter().sum::<f64>() / n as f64;
    let ss_tot: f64 = pair.y_true().iter().map(|t| (t - mean).powi(2)).sum();
    let ss_res = sum_squared_residuals(pair);

    if ss_tot == 0.0 && force_finite {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }

    1.0 - ss_res / ss_tot
}

fn sum_squared_residuals(pair: &PredictionPair<'_>) -> f64 {
    pair.samples().map(|(t, p)| (t - p).powi(2)).sum()
}
