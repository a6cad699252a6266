use thiserror::Error;

use super::state::SimulationState;
use crate::coverage::CoverageError;
use crate::geometry::{Area, GeometryError};

/// Fatal simulation errors. Any of these ends the current trial.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Coverage(#[from] CoverageError),

    #[error("Target area {target} must be in 1..={region_area}")]
    InvalidTarget { target: Area, region_area: Area },

    #[error("Rectangle limit must be positive")]
    ZeroRectangleLimit,

    #[error("Simulation already finished in state {0}")]
    Finished(SimulationState),
}
