//! Configuration for Monte Carlo experiments.

use std::time::Duration;

use super::error::ExperimentError;
use crate::geometry::Region;
use crate::simulation::SimulationConfig;

/// Experiment configuration.
///
/// Each trial runs a fresh simulation until the region is covered (or the
/// simulation's own target is met) or `max_arrivals_per_trial` arrivals have
/// been consumed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExperimentConfig {
    /// Number of trials to run.
    pub trials: usize,
    /// Safety cap on arrivals per trial.
    pub max_arrivals_per_trial: u64,
    /// Seed from which every trial seed is derived.
    pub base_seed: u64,
    /// Run trials on the rayon thread pool.
    pub parallel: bool,
    /// Stop dispatching new trials after this much wall time.
    pub time_budget: Option<Duration>,
    /// Per-trial simulation settings. The arrival budget is replaced by
    /// `max_arrivals_per_trial`.
    pub simulation: SimulationConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            max_arrivals_per_trial: 100_000,
            base_seed: 0,
            parallel: true,
            time_budget: None,
            simulation: SimulationConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Simulation settings for a single trial.
    pub fn trial_simulation(&self) -> SimulationConfig {
        let mut simulation = self.simulation.clone();
        simulation.stop.max_arrivals = Some(self.max_arrivals_per_trial);
        simulation
    }

    pub fn validate(&self, region: &Region) -> Result<(), ExperimentError> {
        if self.max_arrivals_per_trial == 0 {
            return Err(ExperimentError::ZeroArrivalCap);
        }
        self.simulation.validate(region)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationError;

    #[test]
    fn default_config_is_valid() {
        let region = Region::new(10, 10).unwrap();
        let cfg = ExperimentConfig::default();
        assert!(cfg.validate(&region).is_ok());
        assert!(cfg.trials > 0);
    }

    #[test]
    fn trial_simulation_uses_safety_cap() {
        let cfg = ExperimentConfig {
            max_arrivals_per_trial: 77,
            ..ExperimentConfig::default()
        };
        assert_eq!(cfg.trial_simulation().stop.max_arrivals, Some(77));
    }

    #[test]
    fn zero_cap_rejected() {
        let region = Region::new(10, 10).unwrap();
        let cfg = ExperimentConfig {
            max_arrivals_per_trial: 0,
            ..ExperimentConfig::default()
        };
        assert_eq!(cfg.validate(&region), Err(ExperimentError::ZeroArrivalCap));
    }

    #[test]
    fn zero_rectangle_limit_rejected() {
        let region = Region::new(10, 10).unwrap();
        let mut cfg = ExperimentConfig::default();
        cfg.simulation.stop.max_rectangles = Some(0);
        assert_eq!(
            cfg.validate(&region),
            Err(ExperimentError::Simulation(SimulationError::ZeroRectangleLimit))
        );
    }
}
