//! Reusable observers for regscore.
//!
//! This crate provides [`Observer`] implementations for metric evaluations:
//!
//! - [`LogObserver`] — writes one human-readable line per event to any
//!   [`std::io::Write`] sink, filtered by [`Level`]
//! - [`Recorder`] — keeps every event as an owned [`Record`] for later
//!   inspection
//!
//! # Example
//!
//! ```rust
//! use regscore_metrics::Metric;
//! use regscore_observers::LogObserver;
//!
//! let mut log = LogObserver::new(Vec::new());
//! Metric::Rmse
//!     .calculate_scores(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0], &mut log)
//!     .unwrap();
//!
//! let text = String::from_utf8(log.finish().unwrap()).unwrap();
//! assert_eq!(text, "INFO Calculating RMSE\nINFO RMSE: 1\n");
//! ```
//!
//! [`Observer`]: regscore_core::Observer

mod log;
mod record;

pub use log::LogObserver;
pub use record::{Level, Record, Recorder};
