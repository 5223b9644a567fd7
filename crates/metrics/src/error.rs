use thiserror::Error;

use regscore_core::PairError;

use crate::Metric;

/// Reasons a metric cannot be computed from its inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ComputeError {
    #[error(transparent)]
    Pair(#[from] PairError),
}

/// A failed metric computation.
///
/// This is the only error a metric call returns. It names the metric that
/// failed and carries the underlying cause as its source.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("failed to calculate {metric}: {source}")]
pub struct Error {
    pub metric: Metric,
    pub source: ComputeError,
}

/// Returned when parsing a metric name fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown metric `{0}`, expected one of: mse, rmse, r2")]
pub struct ParseMetricError(pub String);
