use thiserror::Error;

use crate::simulation::SimulationError;

/// Errors that prevent an experiment from starting.
///
/// Faults inside individual trials are recorded in the summary instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExperimentError {
    #[error("Arrival cap per trial must be positive")]
    ZeroArrivalCap,

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
