//! Per-trial records and their aggregation.

use std::fmt;
use std::time::Duration;

use crate::geometry::{Area, Region};
use crate::simulation::{SimulationResult, SimulationState};
use crate::Id;

/// How a trial ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrialOutcome {
    /// The region (or the configured target area) was covered.
    Covered,
    /// The trial stopped before coverage: arrival cap, rectangle limit or a
    /// finite source running dry.
    Capped(SimulationState),
    /// The trial was abandoned after a fatal error.
    Faulted(String),
}

/// Record of a single trial.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialRecord {
    pub trial: usize,
    pub seed: u64,
    pub outcome: TrialOutcome,
    pub arrivals: u64,
    pub rectangles: usize,
    pub covered_area: Area,
}

impl TrialRecord {
    pub(crate) fn from_result(trial: usize, seed: u64, result: &SimulationResult) -> Self {
        let outcome = match result.state {
            SimulationState::FullCoverage | SimulationState::TargetReached => TrialOutcome::Covered,
            other => TrialOutcome::Capped(other),
        };
        Self {
            trial,
            seed,
            outcome,
            arrivals: result.arrivals,
            rectangles: result.rectangles(),
            covered_area: result.covered_area,
        }
    }

    pub(crate) fn faulted(trial: usize, seed: u64, error: String) -> Self {
        Self {
            trial,
            seed,
            outcome: TrialOutcome::Faulted(error),
            arrivals: 0,
            rectangles: 0,
            covered_area: 0,
        }
    }

    pub fn is_covered(&self) -> bool {
        self.outcome == TrialOutcome::Covered
    }
}

/// Aggregate over all trials of an experiment.
///
/// Only covered trials enter the arrival statistics; capped, faulted and
/// cancelled trials are counted separately.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentSummary {
    pub run_id: Id,
    pub region: Region,
    pub sampler: String,
    /// Expected area of a single raw arrival after clipping.
    pub mean_candidate_area: f64,
    pub trials_requested: usize,
    /// Trials that reached coverage.
    pub covered: usize,
    /// Trials stopped by the safety cap or another limit.
    pub capped: usize,
    /// Trials abandoned after a fatal error.
    pub faulted: usize,
    /// Trials never started because of cancellation or the time budget.
    pub cancelled: usize,
    pub mean_arrivals: Option<f64>,
    /// Unbiased sample variance of arrivals over covered trials.
    pub variance_arrivals: Option<f64>,
    pub min_arrivals: Option<u64>,
    pub max_arrivals: Option<u64>,
    pub elapsed: Duration,
    /// Every trial that ran, in trial order.
    pub records: Vec<TrialRecord>,
}

impl ExperimentSummary {
    /// Region area divided by the mean candidate area: the number of
    /// arrivals full coverage would need if nothing were ever trimmed.
    pub fn area_lower_bound(&self) -> f64 {
        self.region.area() as f64 / self.mean_candidate_area
    }

    pub fn std_dev_arrivals(&self) -> Option<f64> {
        self.variance_arrivals.map(f64::sqrt)
    }

    /// Trials that actually ran.
    pub fn completed(&self) -> usize {
        self.records.len()
    }
}

impl fmt::Display for ExperimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Experiment {} ({} trials on {} region, {} towers) ===",
            self.run_id, self.trials_requested, self.region, self.sampler
        )?;
        writeln!(f, "  Covered:            {}", self.covered)?;
        writeln!(f, "  Capped:             {}", self.capped)?;
        writeln!(f, "  Faulted:            {}", self.faulted)?;
        writeln!(f, "  Cancelled:          {}", self.cancelled)?;
        match (self.mean_arrivals, self.std_dev_arrivals()) {
            (Some(mean), Some(sd)) => {
                writeln!(f, "  Mean arrivals:      {mean:.2} (sd {sd:.2})")?
            }
            (Some(mean), None) => writeln!(f, "  Mean arrivals:      {mean:.2}")?,
            _ => writeln!(f, "  Mean arrivals:      n/a")?,
        }
        if let (Some(min), Some(max)) = (self.min_arrivals, self.max_arrivals) {
            writeln!(f, "  Arrival range:      {min}..={max}")?;
        }
        writeln!(
            f,
            "  Area lower bound:   {:.2}",
            self.area_lower_bound()
        )?;
        write!(f, "  Elapsed:            {:.2?}", self.elapsed)
    }
}

/// Running statistics over arrivals of covered trials (Welford).
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    records: Vec<TrialRecord>,
    covered: usize,
    capped: usize,
    faulted: usize,
    mean: f64,
    m2: f64,
    min: Option<u64>,
    max: Option<u64>,
}

impl Accumulator {
    pub(crate) fn push(&mut self, record: TrialRecord) {
        match &record.outcome {
            TrialOutcome::Covered => {
                self.covered += 1;
                let x = record.arrivals as f64;
                let delta = x - self.mean;
                self.mean += delta / self.covered as f64;
                self.m2 += delta * (x - self.mean);
                self.min = Some(self.min.map_or(record.arrivals, |m| m.min(record.arrivals)));
                self.max = Some(self.max.map_or(record.arrivals, |m| m.max(record.arrivals)));
            }
            TrialOutcome::Capped(_) => self.capped += 1,
            TrialOutcome::Faulted(_) => self.faulted += 1,
        }
        self.records.push(record);
    }

    pub(crate) fn covered(&self) -> usize {
        self.covered
    }

    pub(crate) fn mean(&self) -> Option<f64> {
        (self.covered > 0).then_some(self.mean)
    }

    pub(crate) fn variance(&self) -> Option<f64> {
        (self.covered > 1).then(|| self.m2 / (self.covered - 1) as f64)
    }

    pub(crate) fn finish(
        self,
        run_id: Id,
        region: Region,
        sampler: String,
        mean_candidate_area: f64,
        trials_requested: usize,
        elapsed: Duration,
    ) -> ExperimentSummary {
        let mean_arrivals = self.mean();
        let variance_arrivals = self.variance();
        let cancelled = trials_requested - self.records.len();
        ExperimentSummary {
            run_id,
            region,
            sampler,
            mean_candidate_area,
            trials_requested,
            covered: self.covered,
            capped: self.capped,
            faulted: self.faulted,
            cancelled,
            mean_arrivals,
            variance_arrivals,
            min_arrivals: self.min,
            max_arrivals: self.max,
            elapsed,
            records: self.records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered(trial: usize, arrivals: u64) -> TrialRecord {
        TrialRecord {
            trial,
            seed: 0,
            outcome: TrialOutcome::Covered,
            arrivals,
            rectangles: 1,
            covered_area: 100,
        }
    }

    #[test]
    fn accumulator_mean_and_variance() {
        let mut acc = Accumulator::default();
        for (i, a) in [4u64, 8, 6, 10].into_iter().enumerate() {
            acc.push(covered(i, a));
        }
        assert_eq!(acc.mean(), Some(7.0));
        // Sample variance of 4, 8, 6, 10 is 20 / 3.
        assert!((acc.variance().unwrap() - 20.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn capped_and_faulted_excluded_from_stats() {
        let mut acc = Accumulator::default();
        acc.push(covered(0, 5));
        acc.push(TrialRecord {
            outcome: TrialOutcome::Capped(SimulationState::BudgetExhausted),
            arrivals: 1000,
            ..covered(1, 0)
        });
        acc.push(TrialRecord::faulted(2, 0, "boom".into()));

        assert_eq!(acc.mean(), Some(5.0));
        assert_eq!(acc.variance(), None);

        let region = Region::new(10, 10).unwrap();
        let summary = acc.finish(
            "run".into(),
            region,
            "test".into(),
            4.0,
            5,
            Duration::ZERO,
        );
        assert_eq!(summary.covered, 1);
        assert_eq!(summary.capped, 1);
        assert_eq!(summary.faulted, 1);
        assert_eq!(summary.cancelled, 2);
        assert_eq!(summary.completed(), 3);
        assert_eq!(summary.area_lower_bound(), 25.0);
        assert_eq!((summary.min_arrivals, summary.max_arrivals), (Some(5), Some(5)));
    }

    #[test]
    fn empty_accumulator_has_no_stats() {
        let acc = Accumulator::default();
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.variance(), None);
    }
}
