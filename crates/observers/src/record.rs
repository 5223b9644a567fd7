use std::fmt;

use regscore_core::Observer;
use regscore_metrics::{Event, Metric};

/// Severity of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("INFO"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

/// An owned, human-readable rendering of an [`Event`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    pub metric: Metric,
    pub message: String,
}

impl Record {
    /// Renders an event.
    #[must_use]
    pub fn from_event(event: &Event<'_>) -> Self {
        let metric = event.metric();
        let name = metric.name();

        let (level, message) = match event {
            Event::Started { .. } => (Level::Info, format!("Calculating {name}")),
            Event::Scored { score, .. } => (Level::Info, format!("{name}: {score}")),
            Event::Failed { error, .. } => (
                Level::Error,
                format!("Error occurred while calculating {name}: {}", error.source),
            ),
        };

        Self {
            level,
            metric,
            message,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level, self.message)
    }
}

/// Keeps every observed event as a [`Record`].
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    records: Vec<Record>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the records in the order they were observed.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the records at or above `level`.
    pub fn at_least(&self, level: Level) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.level >= level)
    }

    /// Consumes the recorder, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Observer<Event<'_>> for Recorder {
    fn observe(&mut self, event: &Event<'_>) {
        self.records.push(Record::from_event(event));
    }
}
