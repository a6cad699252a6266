use thiserror::Error;

use crate::geometry::Area;

/// Recoverable trimming failures.
///
/// Both variants mean the engine gave up on the arrival; the simulator treats
/// the arrival as yielding no rectangle and keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrimError {
    #[error("Guillotine split produced {live} live rectangles, above the cap of {cap}")]
    PathologicalSplit { live: usize, cap: usize },

    #[error("Candidate spans {cells} cells, above the raster cap of {cap}")]
    CandidateTooLarge { cells: Area, cap: Area },
}
