//! Single-trial coverage simulation.
//!
//! A [`CoverageSimulator`] consumes arrivals one at a time, trims each one
//! against the rectangles accepted so far and stops on full coverage or on
//! one of the configured [`StopCriteria`].

mod config;
mod error;
mod result;
mod simulator;
mod state;

#[cfg(test)]
mod tests;

pub use config::{SimulationConfig, StopCriteria};
pub use error::SimulationError;
pub use result::SimulationResult;
pub use simulator::CoverageSimulator;
pub use state::{ArrivalOutcome, SimulationState, SkipReason};
