//! Simulation lifecycle and per-arrival outcomes.

use std::fmt;

use super::config::StopCriteria;
use crate::algorithms::TrimError;
use crate::geometry::{Area, Rect};

/// Lifecycle of a simulation. Every state except `Running` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SimulationState {
    Running,
    /// The accepted rectangles cover the whole region.
    FullCoverage,
    /// Covered area reached the configured target.
    TargetReached,
    /// The configured number of accepted rectangles was reached.
    RectangleLimit,
    /// The arrival budget ran out first.
    BudgetExhausted,
    /// A finite candidate source ran dry.
    SourceExhausted,
}

impl SimulationState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SimulationState::Running)
    }

    /// Evaluates the stop criteria in priority order: full coverage,
    /// rectangle limit, target area, arrival budget.
    pub(crate) fn evaluate(
        criteria: &StopCriteria,
        covered: Area,
        region_area: Area,
        rectangles: usize,
        arrivals: u64,
    ) -> Self {
        if covered == region_area {
            return SimulationState::FullCoverage;
        }
        if criteria.max_rectangles.is_some_and(|max| rectangles >= max) {
            return SimulationState::RectangleLimit;
        }
        if criteria.target_area.is_some_and(|target| covered >= target) {
            return SimulationState::TargetReached;
        }
        if criteria.max_arrivals.is_some_and(|max| arrivals >= max) {
            return SimulationState::BudgetExhausted;
        }
        SimulationState::Running
    }
}

impl fmt::Display for SimulationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SimulationState::Running => "running",
            SimulationState::FullCoverage => "full-coverage",
            SimulationState::TargetReached => "target-reached",
            SimulationState::RectangleLimit => "rectangle-limit",
            SimulationState::BudgetExhausted => "budget-exhausted",
            SimulationState::SourceExhausted => "source-exhausted",
        };
        write!(f, "{s}")
    }
}

/// Why an arrival was dropped before trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkipReason {
    /// Non-positive width or height.
    Degenerate,
    /// Nothing left after clipping to the region.
    OutsideRegion,
    /// The candidate spans the whole region and such towers are disallowed.
    WholeRegion,
}

/// What happened to a single arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrivalOutcome {
    /// A rectangle was added; `trimmed` tells whether it was cut down.
    Accepted { rect: Rect, trimmed: bool },
    /// The candidate lies entirely on covered ground.
    Rejected,
    /// The arrival never reached the trimming step.
    Skipped(SkipReason),
    /// The trimming engine hit its cap; nothing was added.
    Pathological(TrimError),
}

impl ArrivalOutcome {
    pub fn accepted(&self) -> Option<Rect> {
        match self {
            ArrivalOutcome::Accepted { rect, .. } => Some(*rect),
            _ => None,
        }
    }
}
