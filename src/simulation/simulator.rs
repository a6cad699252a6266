//! Sequential placement of towers with trimming.

use tracing::{debug, trace, warn};

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::result::SimulationResult;
use super::state::{ArrivalOutcome, SimulationState, SkipReason};
use crate::algorithms::{TrimEngine, Trimmer};
use crate::coverage::CoverageSet;
use crate::geometry::{Area, Coord, Footprint, Region};

/// Drives one simulation: arrivals in, accepted rectangles out.
///
/// Each arrival goes through the same pipeline:
/// 1. clip the footprint to the region (skip it if nothing is left)
/// 2. collect the accepted rectangles it overlaps
/// 3. trim it to the best free sub-rectangle
/// 4. accept the result, if any
/// 5. re-evaluate the stop criteria
///
/// # Lifecycle
///
/// 1. Create with [`CoverageSimulator::new`].
/// 2. Feed arrivals with [`CoverageSimulator::step`], or hand a whole source
///    to [`CoverageSimulator::run`] / [`CoverageSimulator::drive`].
/// 3. Read the outcome with [`CoverageSimulator::result`] or
///    [`CoverageSimulator::into_result`].
/// 4. Optionally [`CoverageSimulator::reset`] and start over.
#[derive(Debug, Clone)]
pub struct CoverageSimulator {
    region: Region,
    config: SimulationConfig,
    engine: TrimEngine,
    coverage: CoverageSet,
    state: SimulationState,
    arrivals: u64,
    skipped: u64,
    rejected: u64,
    trimmed: u64,
    pathological: u64,
}

impl CoverageSimulator {
    /// Creates a simulator for `region`.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidTarget`] if the configured target area does
    /// not fit the region.
    pub fn new(region: Region, config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate(&region)?;
        let engine = TrimEngine::from_config(&config.trim);
        let mut sim = Self {
            region,
            config,
            engine,
            coverage: CoverageSet::new(region),
            state: SimulationState::Running,
            arrivals: 0,
            skipped: 0,
            rejected: 0,
            trimmed: 0,
            pathological: 0,
        };
        sim.update_state();
        Ok(sim)
    }

    /// Creates a simulator for a `width × height` region anchored at the
    /// origin.
    pub fn with_size(
        width: Coord,
        height: Coord,
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        Self::new(Region::new(width, height)?, config)
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn coverage(&self) -> &CoverageSet {
        &self.coverage
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn arrivals(&self) -> u64 {
        self.arrivals
    }

    pub fn covered_area(&self) -> Area {
        self.coverage.total_area()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Processes one arrival.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::Finished`] if the simulation already stopped.
    /// - [`SimulationError::Coverage`] if the trimmed rectangle still overlaps
    ///   an accepted one. This is a logic fault; the trial must be abandoned.
    pub fn step(&mut self, footprint: Footprint) -> Result<ArrivalOutcome, SimulationError> {
        if self.state.is_terminal() {
            return Err(SimulationError::Finished(self.state));
        }
        self.arrivals += 1;

        let outcome = self.place(footprint)?;
        match &outcome {
            ArrivalOutcome::Accepted { trimmed: true, .. } => self.trimmed += 1,
            ArrivalOutcome::Accepted { .. } => {}
            ArrivalOutcome::Rejected => self.rejected += 1,
            ArrivalOutcome::Skipped(_) => self.skipped += 1,
            ArrivalOutcome::Pathological(_) => self.pathological += 1,
        }

        self.update_state();
        if self.state.is_terminal() {
            debug!(
                state = %self.state,
                arrivals = self.arrivals,
                rectangles = self.coverage.len(),
                covered = self.coverage.total_area(),
                "simulation finished"
            );
        }
        Ok(outcome)
    }

    fn place(&mut self, footprint: Footprint) -> Result<ArrivalOutcome, SimulationError> {
        let candidate = match footprint.to_candidate(&self.region) {
            Ok(Some(candidate)) => candidate,
            Ok(None) => return Ok(ArrivalOutcome::Skipped(SkipReason::OutsideRegion)),
            Err(e) => {
                trace!(?footprint, error = %e, "skipping invalid candidate");
                return Ok(ArrivalOutcome::Skipped(SkipReason::Degenerate));
            }
        };
        if self.config.reject_whole_region && candidate == self.region.bounds() {
            return Ok(ArrivalOutcome::Skipped(SkipReason::WholeRegion));
        }

        let blockers = self.coverage.overlapping_vec(&candidate);
        match self.engine.trim(&candidate, &blockers) {
            Ok(Some(rect)) => {
                self.coverage.accept(rect)?;
                let trimmed = rect != candidate;
                if trimmed {
                    debug!(%candidate, %rect, blockers = blockers.len(), "trimmed arrival");
                }
                Ok(ArrivalOutcome::Accepted { rect, trimmed })
            }
            Ok(None) => {
                trace!(%candidate, "arrival lands on covered ground");
                Ok(ArrivalOutcome::Rejected)
            }
            Err(e) => {
                warn!(
                    %candidate,
                    blockers = blockers.len(),
                    engine = self.engine.name(),
                    error = %e,
                    "trimming gave up; dropping arrival"
                );
                Ok(ArrivalOutcome::Pathological(e))
            }
        }
    }

    fn update_state(&mut self) {
        self.state = SimulationState::evaluate(
            &self.config.stop,
            self.coverage.total_area(),
            self.region.area(),
            self.coverage.len(),
            self.arrivals,
        );
    }

    /// Feeds arrivals from `source` until the simulation stops.
    ///
    /// If `source` ends first the state becomes
    /// [`SimulationState::SourceExhausted`]. An endless source with no stop
    /// criterion set only returns once the region is fully covered.
    pub fn drive<I>(&mut self, source: I) -> Result<SimulationState, SimulationError>
    where
        I: IntoIterator<Item = Footprint>,
    {
        let mut source = source.into_iter();
        while !self.state.is_terminal() {
            match source.next() {
                Some(footprint) => {
                    self.step(footprint)?;
                }
                None => self.state = SimulationState::SourceExhausted,
            }
        }
        Ok(self.state)
    }

    /// Runs to completion and returns the result.
    pub fn run<I>(mut self, source: I) -> Result<SimulationResult, SimulationError>
    where
        I: IntoIterator<Item = Footprint>,
    {
        self.drive(source)?;
        Ok(self.into_result())
    }

    /// Snapshot of the current outcome.
    pub fn result(&self) -> SimulationResult {
        self.clone().into_result()
    }

    pub fn into_result(self) -> SimulationResult {
        SimulationResult {
            region: self.region,
            covered_area: self.coverage.total_area(),
            coverage: self.coverage,
            arrivals: self.arrivals,
            state: self.state,
            skipped: self.skipped,
            rejected: self.rejected,
            trimmed: self.trimmed,
            pathological: self.pathological,
        }
    }

    /// Clears all accepted rectangles and counters.
    pub fn reset(&mut self) {
        self.coverage.clear();
        self.arrivals = 0;
        self.skipped = 0;
        self.rejected = 0;
        self.trimmed = 0;
        self.pathological = 0;
        self.update_state();
    }
}
