//! Scoring strategies for regression predictions.
//!
//! A [`Metric`] compares ground truth against predictions and returns a single
//! score. Three interchangeable variants are provided:
//!
//! - [`Metric::Mse`] — mean squared error (root form by default, see [`MseForm`])
//! - [`Metric::Rmse`] — root mean squared error
//! - [`Metric::R2`] — coefficient of determination
//!
//! # Observer Events
//!
//! Every call reports to an [`Observer`] passed in by the caller:
//!
//! - [`Event::Started`] — before the computation
//! - [`Event::Scored`] — the computation succeeded
//! - [`Event::Failed`] — the computation failed; the same [`Error`] is then
//!   returned to the caller
//!
//! Pass `&mut ()` (or use the `_unobserved` variants) to ignore events.
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for [`Config`], [`MseForm`],
//!   [`Metric`], and [`Scorecard`]. The serialization tests in
//!   `tests/serde_config.rs` only run with `cargo test --features serde`.
//!
//! # Example
//!
//! ```
//! use regscore_metrics::Metric;
//!
//! let y_true = [1.0, 2.0, 3.0];
//! let y_pred = [2.0, 3.0, 4.0];
//!
//! let rmse = Metric::Rmse.calculate_scores_unobserved(&y_true, &y_pred).unwrap();
//! assert_eq!(rmse, 1.0);
//! ```
//!
//! [`Observer`]: regscore_core::Observer

mod config;
mod error;
mod evaluator;
mod event;
mod metric;
mod scorecard;

pub mod formula;


pub use config::{Config, MseForm};
pub use error::{ComputeError, Error, ParseMetricError};
pub use evaluator::Evaluator;
pub use event::Event;
pub use metric::Metric;
pub use scorecard::{Scorecard, evaluate_all};
