//! towercover - random tower coverage of a rectangular region
//!
//! Towers arrive one at a time as random axis-aligned rectangles. Each one is
//! trimmed to the largest sub-rectangle that does not overlap the towers
//! already accepted, and the process repeats until the region is covered.
//! Single runs live in [`simulation`]; repeated seeded trials and their
//! statistics live in [`experiment`].

pub mod algorithms;
pub mod coverage;
pub mod experiment;
pub mod generator;
pub mod geometry;
pub mod simulation;

pub use coverage::{CoverageGrid, CoverageSet};
pub use experiment::{ExperimentConfig, ExperimentRunner, ExperimentSummary};
pub use geometry::{Footprint, Rect, Region};
pub use simulation::{CoverageSimulator, SimulationConfig, SimulationResult};

/// Identifier type used for experiment runs.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
