use crate::{Error, Metric};

/// Events emitted while a metric is computed.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The computation is about to run.
    Started {
        /// The metric being computed.
        metric: Metric,

        /// Number of ground-truth samples supplied.
        samples: usize,
    },

    /// The computation succeeded.
    Scored {
        /// The metric that was computed.
        metric: Metric,

        /// The resulting score.
        score: f64,
    },

    /// The computation failed and the error is about to be returned.
    Failed {
        /// The metric that failed.
        metric: Metric,

        /// The error returned to the caller.
        error: &'a Error,
    },
}

impl Event<'_> {
    /// Returns the metric this event belongs to.
    #[must_use]
    pub fn metric(&self) -> Metric {
        match self {
            Self::Started { metric, .. }
            | Self::Scored { metric, .. }
            | Self::Failed { metric, .. } => *metric,
        }
    }

    /// Returns `true` for [`Event::Failed`].
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
