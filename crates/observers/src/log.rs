use std::io::{self, Write};

use regscore_core::Observer;
use regscore_metrics::Event;

use crate::{Level, Record};

/// Writes one line per event to an [`io::Write`] sink.
///
/// Lines have the form `LEVEL message`, for example `INFO RMSE: 1`. Events
/// below the minimum level (default [`Level::Info`]) are skipped.
///
/// A failed write never affects the metric result. The first I/O error is
/// kept, later events are dropped, and [`LogObserver::finish`] reports it.
#[derive(Debug)]
pub struct LogObserver<W> {
    sink: W,
    min_level: Level,
    error: Option<io::Error>,
}

impl<W: Write> LogObserver<W> {
    /// Creates an observer that logs every event to `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            min_level: Level::Info,
            error: None,
        }
    }

    /// Only log events at or above `level`.
    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Returns a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Flushes and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns the first write error seen while observing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}

impl<W: Write> Observer<Event<'_>> for LogObserver<W> {
    fn observe(&mut self, event: &Event<'_>) {
        if self.error.is_some() {
            return;
        }

        let record = Record::from_event(event);
        if record.level < self.min_level {
            return;
        }

        if let Err(err) = writeln!(self.sink, "{record}") {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use regscore_metrics::Metric;

    use super::*;

    /// A sink that rejects every write.
    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn text(log: LogObserver<Vec<u8>>) -> String {
        String::from_utf8(log.finish().unwrap()).unwrap()
    }

    #[test]
    fn logs_computation_and_result() {
        let mut log = LogObserver::new(Vec::new());

        Metric::Mse
            .calculate_scores(&[1.0, 2.0, 3.0], &[1.0, 2.0, 5.0], &mut log)
            .unwrap();

        let expected_score = (4.0_f64 / 3.0).sqrt();
        assert_eq!(
            text(log),
            format!("INFO Calculating MSE\nINFO MSE: {expected_score}\n")
        );
    }

    #[test]
    fn logs_error_before_returning_it() {
        let mut log = LogObserver::new(Vec::new());

        let err = Metric::R2
            .calculate_scores(&[1.0, 2.0, 3.0], &[2.0], &mut log)
            .unwrap_err();

        assert_eq!(err.metric, Metric::R2);
        assert_eq!(
            text(log),
            "INFO Calculating R2 Score\n\
             ERROR Error occurred while calculating R2 Score: \
             inconsistent number of samples: y_true has 3, y_pred has 1\n"
        );
    }

    #[test]
    fn logs_undefined_r2_as_a_score() {
        let mut log = LogObserver::new(Vec::new());

        let r2 = Metric::R2.calculate_scores(&[1.0], &[2.0], &mut log).unwrap();

        assert!(r2.is_nan());
        assert_eq!(text(log), "INFO Calculating R2 Score\nINFO R2 Score: NaN\n");
    }

    #[test]
    fn min_level_filters_info() {
        let mut log = LogObserver::new(Vec::new()).with_min_level(Level::Error);

        Metric::Rmse
            .calculate_scores(&[1.0, 2.0], &[1.0, 2.0], &mut log)
            .unwrap();
        assert!(log.get_ref().is_empty());

        let _ = Metric::Rmse.calculate_scores(&[], &[], &mut log);
        assert_eq!(
            text(log),
            "ERROR Error occurred while calculating RMSE: found empty input\n"
        );
    }

    #[test]
    fn write_failure_does_not_change_score() {
        let mut log = LogObserver::new(Broken);

        let score = Metric::Rmse
            .calculate_scores(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0], &mut log)
            .unwrap();

        assert_eq!(score, 1.0);
        let err = log.finish().unwrap_err();
        assert_eq!(err.to_string(), "sink closed");
    }
}
