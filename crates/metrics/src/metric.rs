use std::{fmt, str::FromStr};

use regscore_core::Observer;

use crate::{Config, Error, Evaluator, Event, ParseMetricError};

/// The available scoring strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// Mean squared error.
    ///
    /// Reports the root form unless configured otherwise, see
    /// [`MseForm`](crate::MseForm).
    Mse,

    /// Root mean squared error.
    Rmse,

    /// Coefficient of determination.
    R2,
}

impl Metric {
    /// Every metric, in the order [`evaluate_all`](crate::evaluate_all) runs them.
    pub const ALL: [Metric; 3] = [Metric::Mse, Metric::Rmse, Metric::R2];

    /// Returns the human-readable name used in events and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mse => "MSE",
            Self::Rmse => "RMSE",
            Self::R2 => "R2 Score",
        }
    }

    /// Whether a higher score means a better prediction.
    #[must_use]
    pub fn higher_is_better(&self) -> bool {
        matches!(self, Self::R2)
    }

    /// Scores predictions against ground truth with the default [`Config`].
    ///
    /// The observer receives [`Event::Started`] and then either
    /// [`Event::Scored`] or [`Event::Failed`].
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
        Evaluator::new(*self, Config::default()).calculate_scores(y_true, y_pred, observer)
    }

    /// Scores predictions against ground truth without observer support.
    ///
    /// # Errors
    ///
    /// See [`Metric::calculate_scores`].
    pub fn calculate_scores_unobserved(
        &self,
        y_true: &[f64],
        y_pred: &[f64],
    ) -> Result<f64, Error> {
        self.calculate_scores(y_true, y_pred, &mut ())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mse" => Ok(Self::Mse),
            "rmse" => Ok(Self::Rmse),
            "r2" | "r2_score" | "r2 score" => Ok(Self::R2),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}
