use regscore_core::Observer;

use crate::{Config, Error, Evaluator, Event, Metric};

/// Scores from every [`Metric`] for one pair of sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scorecard {
    pub mse: f64,
    pub rmse: f64,
    pub r2: f64,
}

impl Scorecard {
    /// Returns the score for `metric`.
    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Mse => self.mse,
            Metric::Rmse => self.rmse,
            Metric::R2 => self.r2,
        }
    }
}

/// Computes every metric in [`Metric::ALL`] order with a shared config.
///
/// Each metric reports its own events to `observer`. Evaluation stops at the
/// first failure, so later metrics emit nothing.
///
/// # Errors
///
/// Returns the first metric error encountered.
pub fn evaluate_all<Obs>(
    y_true: &[f64],
    y_pred: &[f64],
    config: &Config,
    observer: &mut Obs,
) -> Result<Scorecard, Error>
where
    Obs: for<'a> Observer<Event<'a>> + ?Sized,
{
    let mut score = |metric: Metric| {
        Evaluator::new(metric, *config).calculate_scores(y_true, y_pred, &mut *observer)
    };

    Ok(Scorecard {
        mse: score(Metric::Mse)?,
        rmse: score(Metric::Rmse)?,
        r2: score(Metric::R2)?,
    })
}
