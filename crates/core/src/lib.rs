//! Core traits and types for regscore.
//!
//! This crate defines the shared abstractions that metrics and observers
//! build on:
//!
//! - [`Observer`] — receives evaluation events from a metric call
//! - [`PredictionPair`] — a validated view over ground truth and predictions
//! - [`PairError`] — why a pair of sequences cannot be scored

mod observer;
mod pair;

pub use observer::Observer;
pub use pair::{PairError, PredictionPair, Side};
