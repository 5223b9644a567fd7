/// How the [`Metric::Mse`](crate::Metric::Mse) variant reports its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MseForm {
    /// Square root of the mean squared error, identical to RMSE.
    ///
    /// This matches the scores produced by earlier releases of the MSE metric.
    #[default]
    Rooted,

    /// The plain mean of squared errors.
    Squared,
}

/// Configuration shared by all metric variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    mse_form: MseForm,
    force_finite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(MseForm::Rooted, true)
    }
}

impl Config {
    /// Creates a new config.
    #[must_use]
    pub const fn new(mse_form: MseForm, force_finite: bool) -> Self {
        Self {
            mse_form,
            force_finite,
        }
    }

    /// Sets how the MSE variant reports its score.
    #[must_use]
    pub const fn with_mse_form(mut self, mse_form: MseForm) -> Self {
        self.mse_form = mse_form;
        self
    }

    /// Sets whether R2 replaces undefined scores on constant targets.
    #[must_use]
    pub const fn with_force_finite(mut self, force_finite: bool) -> Self {
        self.force_finite = force_finite;
        self
    }

    /// Returns how the MSE variant reports its score.
    #[must_use]
    pub const fn mse_form(&self) -> MseForm {
        self.mse_form
    }

    /// Returns whether R2 replaces undefined scores on constant targets.
    ///
    /// When `true`, a constant `y_true` scores `1.0` for perfect predictions
    /// and `0.0` otherwise. When `false`, the raw ratio is returned, which is
    /// `NaN` or negative infinity.
    #[must_use]
    pub const fn force_finite(&self) -> bool {
        self.force_finite
    }
}
