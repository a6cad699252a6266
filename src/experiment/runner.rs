//! Monte Carlo driver: many independent trials, one summary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use super::config::ExperimentConfig;
use super::error::ExperimentError;
use super::summary::{Accumulator, ExperimentSummary, TrialRecord};
use crate::generate_id;
use crate::generator::{trial_seed, CandidateStream, FootprintSampler};
use crate::geometry::Region;
use crate::simulation::CoverageSimulator;

/// Cooperative cancellation flag shared with a running experiment.
///
/// Cancelling stops new trials from being dispatched; trials already running
/// finish normally and are included in the summary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs repeated coverage trials over one region and sampler.
///
/// Trial `i` is seeded with [`trial_seed`]`(base_seed, i)` and owns its own
/// simulator and RNG, so results do not depend on scheduling: a parallel and
/// a sequential run with the same configuration produce the same records.
#[derive(Debug)]
pub struct ExperimentRunner<S> {
    region: Region,
    sampler: S,
    config: ExperimentConfig,
    cancel: CancelToken,
}

impl<S: FootprintSampler> ExperimentRunner<S> {
    pub fn new(region: Region, sampler: S, config: ExperimentConfig) -> Result<Self, ExperimentError> {
        config.validate(&region)?;
        Ok(Self {
            region,
            sampler,
            config,
            cancel: CancelToken::new(),
        })
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Handle for cancelling [`ExperimentRunner::run`] from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Runs every trial and aggregates the records in trial order.
    pub fn run(&self) -> ExperimentSummary {
        let run_id = generate_id();
        let started = Instant::now();
        info!(
            %run_id,
            region = %self.region,
            sampler = self.sampler.name(),
            trials = self.config.trials,
            parallel = self.config.parallel,
            base_seed = self.config.base_seed,
            "starting experiment"
        );

        let dispatch = |trial: usize| -> Option<TrialRecord> {
            if self.should_stop(started) {
                return None;
            }
            Some(self.run_trial(trial))
        };

        let records: Vec<Option<TrialRecord>> = if self.config.parallel {
            (0..self.config.trials).into_par_iter().map(dispatch).collect()
        } else {
            let mut records = Vec::with_capacity(self.config.trials);
            for trial in 0..self.config.trials {
                let record = dispatch(trial);
                let stop = record.is_none();
                records.push(record);
                if stop {
                    break;
                }
            }
            records
        };

        let mut acc = Accumulator::default();
        for record in records.into_iter().flatten() {
            acc.push(record);
        }
        if acc.covered() == 0 && self.config.trials > 0 {
            warn!(%run_id, "no trial reached coverage");
        }

        let summary = acc.finish(
            run_id,
            self.region,
            self.sampler.name().to_string(),
            self.sampler.mean_area(&self.region),
            self.config.trials,
            started.elapsed(),
        );
        info!(
            run_id = %summary.run_id,
            covered = summary.covered,
            capped = summary.capped,
            faulted = summary.faulted,
            cancelled = summary.cancelled,
            mean_arrivals = ?summary.mean_arrivals,
            elapsed = ?summary.elapsed,
            "experiment finished"
        );
        summary
    }

    /// Runs a single trial with its derived seed.
    pub fn run_trial(&self, trial: usize) -> TrialRecord {
        let seed = trial_seed(self.config.base_seed, trial);
        let outcome = CoverageSimulator::new(self.region, self.config.trial_simulation())
            .and_then(|sim| sim.run(CandidateStream::new(&self.sampler, self.region, seed)));

        match outcome {
            Ok(result) => {
                let record = TrialRecord::from_result(trial, seed, &result);
                trace!(
                    trial,
                    seed,
                    arrivals = record.arrivals,
                    state = %result.state,
                    "trial finished"
                );
                record
            }
            Err(e) => {
                warn!(trial, seed, error = %e, "trial faulted");
                TrialRecord::faulted(trial, seed, e.to_string())
            }
        }
    }

    fn should_stop(&self, started: Instant) -> bool {
        if self.cancel.is_cancelled() {
            return true;
        }
        match self.config.time_budget {
            Some(budget) if started.elapsed() >= budget => {
                debug!(?budget, "time budget spent; no new trials");
                true
            }
            _ => false,
        }
    }
}
