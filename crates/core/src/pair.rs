use std::fmt;

use thiserror::Error;

/// Identifies one of the two sequences in a [`PredictionPair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The ground-truth values.
    True,

    /// The predicted values.
    Pred,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("y_true"),
            Self::Pred => f.write_str("y_pred"),
        }
    }
}

/// Errors that make a pair of sequences unscorable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PairError {
    #[error("found empty input")]
    Empty,

    #[error("inconsistent number of samples: y_true has {y_true}, y_pred has {y_pred}")]
    LengthMismatch { y_true: usize, y_pred: usize },

    #[error("{side} contains a non-finite value at index {index}")]
    NonFinite { side: Side, index: usize },
}

/// Ground truth and predictions of equal, non-zero length with finite values.
///
/// A `PredictionPair` borrows the caller's slices; constructing one only
/// validates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionPair<'a> {
    y_true: &'a [f64],
    y_pred: &'a [f64],
}

impl<'a> PredictionPair<'a> {
    /// Validates and wraps a pair of sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if either sequence is empty, the lengths differ, or
    /// any value is `NaN` or infinite. Length is checked before values.
    pub fn new(y_true: &'a [f64], y_pred: &'a [f64]) -> Result<Self, PairError> {
        if y_true.len() != y_pred.len() {
            return Err(PairError::LengthMismatch {
                y_true: y_true.len(),
                y_pred: y_pred.len(),
            });
        }
        if y_true.is_empty() {
            return Err(PairError::Empty);
        }
        check_finite(y_true, Side::True)?;
        check_finite(y_pred, Side::Pred)?;

        Ok(Self { y_true, y_pred })
    }

    /// Returns the ground-truth values.
    #[must_use]
    pub fn y_true(&self) -> &'a [f64] {
        self.y_true
    }

    /// Returns the predicted values.
    #[must_use]
    pub fn y_pred(&self) -> &'a [f64] {
        self.y_pred
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    /// Always `false`; an empty pair cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over `(true, predicted)` samples in order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.y_true.iter().copied().zip(self.y_pred.iter().copied())
    }
}

fn check_finite(values: &[f64], side: Side) -> Result<(), PairError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PairError::NonFinite { side, index }),
        None => Ok(()),
    }
}
