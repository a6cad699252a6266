use thiserror::Error;

use crate::geometry::{Rect, Region};

/// Faults raised by [`CoverageSet`](super::CoverageSet).
///
/// These indicate a logic error in the caller (usually the trimming step),
/// never bad user input, and must abort the current trial.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Invariant violation: {candidate} overlaps accepted rectangle #{index} {existing}")]
    InvariantViolation {
        candidate: Rect,
        existing: Rect,
        index: usize,
    },

    #[error("Invariant violation: {candidate} lies outside the {region} region")]
    OutsideRegion { candidate: Rect, region: Region },
}
