//! Configuration for a single coverage simulation.

use super::error::SimulationError;
use crate::algorithms::TrimConfig;
use crate::geometry::{Area, Region};

/// When a simulation stops, besides reaching full coverage.
///
/// `None` disables a criterion. With everything disabled the simulation
/// runs until the region is covered or the candidate source ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StopCriteria {
    /// Arrival budget (fixed-n mode). Skipped arrivals count too. A budget
    /// of zero is allowed and stops the simulation before any arrival.
    pub max_arrivals: Option<u64>,
    /// Maximum number of accepted rectangles (towers). Must be positive.
    pub max_rectangles: Option<usize>,
    /// Covered area at which the simulation counts as done.
    pub target_area: Option<Area>,
}

impl StopCriteria {
    /// Only the arrival budget.
    pub fn arrivals(max_arrivals: u64) -> Self {
        Self {
            max_arrivals: Some(max_arrivals),
            ..Self::default()
        }
    }
}

/// Simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    pub stop: StopCriteria,
    pub trim: TrimConfig,
    /// Skip candidates that span the whole region, so full coverage always
    /// takes more than one tower.
    pub reject_whole_region: bool,
}

impl SimulationConfig {
    /// Checks the configuration against `region`.
    pub fn validate(&self, region: &Region) -> Result<(), SimulationError> {
        if self.stop.max_rectangles == Some(0) {
            return Err(SimulationError::ZeroRectangleLimit);
        }
        if let Some(target) = self.stop.target_area {
            if target == 0 || target > region.area() {
                return Err(SimulationError::InvalidTarget {
                    target,
                    region_area: region.area(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let region = Region::new(10, 10).unwrap();
        let cfg = SimulationConfig::default();
        assert!(cfg.validate(&region).is_ok());
        assert!(!cfg.reject_whole_region);
        assert_eq!(cfg.stop, StopCriteria::default());
    }

    #[test]
    fn target_outside_region_is_rejected() {
        let region = Region::new(10, 10).unwrap();
        let mut cfg = SimulationConfig::default();
        cfg.stop.target_area = Some(101);
        assert_eq!(
            cfg.validate(&region),
            Err(SimulationError::InvalidTarget {
                target: 101,
                region_area: 100
            })
        );
        cfg.stop.target_area = Some(0);
        assert!(cfg.validate(&region).is_err());
        cfg.stop.target_area = Some(100);
        assert!(cfg.validate(&region).is_ok());
    }

    #[test]
    fn zero_rectangle_limit_is_rejected() {
        let region = Region::new(10, 10).unwrap();
        let mut cfg = SimulationConfig::default();
        cfg.stop.max_rectangles = Some(0);
        assert_eq!(cfg.validate(&region), Err(SimulationError::ZeroRectangleLimit));
        cfg.stop.max_rectangles = Some(1);
        assert!(cfg.validate(&region).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_partial_json() {
        let cfg: SimulationConfig =
            serde_json::from_str(r#"{"stop":{"max_arrivals":20},"trim":{"engine":"histogram"}}"#)
                .unwrap();
        assert_eq!(cfg.stop.max_arrivals, Some(20));
        assert_eq!(cfg.trim.engine, crate::algorithms::TrimEngineKind::Histogram);
        assert_eq!(cfg.trim.max_live, crate::algorithms::trim::DEFAULT_MAX_LIVE);
    }
}
