//! Monte Carlo experiments over many independent coverage trials.
//!
//! An [`ExperimentRunner`] repeats the single-trial simulation with derived
//! seeds, optionally on the rayon thread pool, and folds the per-trial
//! [`TrialRecord`]s into an [`ExperimentSummary`].

mod config;
mod error;
mod runner;
mod summary;

pub use config::ExperimentConfig;
pub use error::ExperimentError;
pub use runner::{CancelToken, ExperimentRunner};
pub use summary::{ExperimentSummary, TrialOutcome, TrialRecord};
