//! Observable outcome of a finished simulation.

use std::fmt;

use super::state::SimulationState;
use crate::coverage::CoverageSet;
use crate::geometry::{Area, Region};

/// Final record of one simulation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    pub region: Region,
    /// Accepted rectangles in acceptance order.
    pub coverage: CoverageSet,
    /// Arrivals consumed, including skipped and rejected ones.
    pub arrivals: u64,
    pub covered_area: Area,
    pub state: SimulationState,
    /// Arrivals dropped before trimming (degenerate, outside, whole region).
    pub skipped: u64,
    /// Arrivals that landed entirely on covered ground.
    pub rejected: u64,
    /// Accepted arrivals that had to be cut down.
    pub trimmed: u64,
    /// Arrivals abandoned because the trimming engine hit its cap.
    pub pathological: u64,
}

impl SimulationResult {
    pub fn rectangles(&self) -> usize {
        self.coverage.len()
    }

    /// Uncovered area of the region.
    pub fn gap_area(&self) -> Area {
        self.region.area().saturating_sub(self.covered_area)
    }

    /// Covered fraction of the region, in `[0, 1]`.
    pub fn coverage_ratio(&self) -> f64 {
        self.covered_area as f64 / self.region.area() as f64
    }

    pub fn reached_full_coverage(&self) -> bool {
        self.state == SimulationState::FullCoverage
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Simulation on {} region ===", self.region)?;
        writeln!(f, "  State:          {}", self.state)?;
        writeln!(f, "  Arrivals:       {}", self.arrivals)?;
        writeln!(f, "  Rectangles:     {}", self.rectangles())?;
        writeln!(
            f,
            "  Covered area:   {} ({:.1}%)",
            self.covered_area,
            self.coverage_ratio() * 100.0
        )?;
        writeln!(f, "  Gap area:       {}", self.gap_area())?;
        write!(
            f,
            "  Trimmed/rejected/skipped: {}/{}/{}",
            self.trimmed, self.rejected, self.skipped
        )
    }
}
