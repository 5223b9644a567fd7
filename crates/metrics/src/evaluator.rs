use regscore_core::{Observer, PredictionPair};

use crate::{
    ComputeError, Config, Error, Event, Metric, MseForm,
    formula::{mean_squared_error, r2_score, root_mean_squared_error},
};

/// A metric bound to a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    metric: Metric,
    config: Config,
}

impl Evaluator {
    /// Creates an evaluator for `metric` using `config`.
    #[must_use]
    pub const fn new(metric: Metric, config: Config) -> Self {
        Self { metric, config }
    }

    /// Returns the metric this evaluator computes.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns the config this evaluator uses.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Scores predictions against ground truth.
    ///
    /// The observer receives [`Event::Started`] before anything is computed.
    /// On success it then receives [`Event::Scored`]. On failure it receives
    /// [`Event::Failed`] with the exact error that is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are empty, differ in length, or contain
    /// non-finite values.
    pub fn calculate_scores<Obs>(
        &self,
        y_true: &[f64],
        y_pred: &[f64],
        observer: &mut Obs,
    ) -> Result<f64, Error>
    where
        Obs: for<'a> Observer<Event<'a>> + ?Sized,
    {
        let metric = self.metric;
        observer.observe(&Event::Started {
            metric,
            samples: y_true.len(),
        });

        match self.compute(y_true, y_pred) {
            Ok(score) => {
                observer.observe(&Event::Scored { metric, score });
                Ok(score)
            }
            Err(source) => {
                let error = Error { metric, source };
                observer.observe(&Event::Failed {
                    metric,
                    error: &error,
                });
                Err(error)
            }
        }
    }

    /// Scores predictions against ground truth without observer support.
    ///
    /// # Errors
    ///
    /// See [`Evaluator::calculate_scores`].
    pub fn calculate_scores_unobserved(
        &self,
        y_true: &[f64],
        y_pred: &[f64],
    ) -> Result<f64, Error> {
        self.calculate_scores(y_true, y_pred, &mut ())
    }

    fn compute(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, ComputeError> {
        let pair = PredictionPair::new(y_true, y_pred)?;

        match self.metric {
            Metric::Mse => Ok(match self.config.mse_form() {
                MseForm::Rooted => root_mean_squared_error(&pair),
                MseForm::Squared => mean_squared_error(&pair),
            }),
            Metric::Rmse => Ok(root_mean_squared_error(&pair)),
            Metric::R2 => Ok(r2_score(&pair, self.config.force_finite())),
        }
    }
}
