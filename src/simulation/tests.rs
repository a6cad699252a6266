//! Test suite for the coverage simulator.

use super::*;
use crate::algorithms::{TrimConfig, TrimEngineKind};
use crate::coverage::CoverageGrid;
use crate::generator::{CandidateStream, UniformFootprints};
use crate::geometry::{Footprint, GeometryError, Rect, Region};

fn r(x0: i64, y0: i64, x1: i64, y1: i64) -> Rect {
    Rect::new(x0, y0, x1, y1).unwrap()
}

fn fp(x0: i64, y0: i64, x1: i64, y1: i64) -> Footprint {
    Footprint::new(x0, y0, x1 - x0, y1 - y0)
}

fn sim() -> CoverageSimulator {
    CoverageSimulator::with_size(10, 10, SimulationConfig::default()).unwrap()
}

fn assert_pairwise_disjoint(rects: &[Rect]) {
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(!a.intersects(b), "{a} overlaps {b}");
        }
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn first_arrival_accepted_unchanged() {
        let mut sim = sim();
        let outcome = sim.step(fp(0, 0, 5, 5)).unwrap();
        assert_eq!(
            outcome,
            ArrivalOutcome::Accepted {
                rect: r(0, 0, 5, 5),
                trimmed: false
            }
        );
        assert_eq!(sim.covered_area(), 25);
        assert_eq!(sim.state(), SimulationState::Running);
    }

    #[test]
    fn overlapping_arrival_trimmed_to_maximal_piece() {
        let mut sim = sim();
        sim.step(fp(0, 0, 5, 5)).unwrap();
        let outcome = sim.step(fp(3, 3, 8, 8)).unwrap();

        let rect = outcome.accepted().unwrap();
        assert_eq!(rect.area(), 15);
        assert!(rect == r(5, 3, 8, 8) || rect == r(3, 5, 8, 8));
        assert_eq!(sim.covered_area(), 40);
    }

    #[test]
    fn covered_arrival_rejected() {
        let mut sim = sim();
        sim.step(fp(0, 0, 5, 5)).unwrap();
        assert_eq!(sim.step(fp(0, 0, 1, 1)).unwrap(), ArrivalOutcome::Rejected);
        assert_eq!(sim.covered_area(), 25);
        assert_eq!(sim.arrivals(), 2);
    }

    #[test]
    fn quadrants_reach_full_coverage_in_any_order() {
        let quads = [fp(0, 0, 5, 5), fp(5, 0, 10, 5), fp(0, 5, 5, 10), fp(5, 5, 10, 10)];
        for order in [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]] {
            let source: Vec<_> = order.iter().map(|&i| quads[i]).collect();
            let result = sim().run(source).unwrap();
            assert_eq!(result.covered_area, 100);
            assert_eq!(result.arrivals, 4);
            assert_eq!(result.state, SimulationState::FullCoverage);
            assert_eq!(result.gap_area(), 0);
            assert_eq!(result.trimmed, 0);
        }
    }

    #[test]
    fn step_after_finish_fails() {
        let mut sim = sim();
        sim.step(fp(0, 0, 10, 10)).unwrap();
        assert!(sim.is_finished());
        assert_eq!(
            sim.step(fp(0, 0, 1, 1)),
            Err(SimulationError::Finished(SimulationState::FullCoverage))
        );
    }
}

#[cfg(test)]
mod skipping {
    use super::*;

    #[test]
    fn degenerate_arrival_counts_but_adds_nothing() {
        let mut sim = sim();
        let outcome = sim.step(Footprint::new(2, 2, 0, 3)).unwrap();
        assert_eq!(outcome, ArrivalOutcome::Skipped(SkipReason::Degenerate));
        assert_eq!(sim.arrivals(), 1);
        assert!(sim.coverage().is_empty());
    }

    #[test]
    fn arrival_outside_region_skipped() {
        let mut sim = sim();
        let outcome = sim.step(Footprint::new(10, 0, 3, 3)).unwrap();
        assert_eq!(outcome, ArrivalOutcome::Skipped(SkipReason::OutsideRegion));
    }

    #[test]
    fn arrival_partly_outside_is_clipped() {
        let mut sim = sim();
        let outcome = sim.step(Footprint::new(8, -2, 5, 4)).unwrap();
        assert_eq!(
            outcome,
            ArrivalOutcome::Accepted {
                rect: r(8, 0, 10, 2),
                trimmed: false
            }
        );
    }

    #[test]
    fn whole_region_rejected_when_configured() {
        let config = SimulationConfig {
            reject_whole_region: true,
            ..SimulationConfig::default()
        };
        let mut sim = CoverageSimulator::with_size(4, 4, config).unwrap();
        assert_eq!(
            sim.step(fp(0, 0, 4, 4)).unwrap(),
            ArrivalOutcome::Skipped(SkipReason::WholeRegion)
        );
        assert_eq!(
            sim.step(fp(-1, -1, 5, 5)).unwrap(),
            ArrivalOutcome::Skipped(SkipReason::WholeRegion)
        );
        let result = sim.result();
        assert_eq!(result.skipped, 2);
        assert_eq!(result.covered_area, 0);
    }

    #[test]
    fn pathological_split_is_absorbed() {
        let config = SimulationConfig {
            trim: TrimConfig {
                max_live: 1,
                ..TrimConfig::default()
            },
            ..SimulationConfig::default()
        };
        let mut sim = CoverageSimulator::with_size(10, 10, config).unwrap();
        sim.step(fp(4, 4, 6, 6)).unwrap();
        let outcome = sim.step(fp(0, 0, 10, 10)).unwrap();
        assert!(matches!(outcome, ArrivalOutcome::Pathological(_)));
        assert_eq!(sim.covered_area(), 4);
        assert_eq!(sim.result().pathological, 1);
        assert_eq!(sim.state(), SimulationState::Running);
    }
}

#[cfg(test)]
mod stopping {
    use super::*;

    #[test]
    fn invalid_region_is_fatal() {
        assert!(matches!(
            CoverageSimulator::with_size(0, 10, SimulationConfig::default()),
            Err(SimulationError::Geometry(_))
        ));
    }

    #[test]
    fn oversized_region_is_rejected_not_panicking() {
        assert_eq!(
            CoverageSimulator::with_size(1 << 33, 1 << 33, SimulationConfig::default())
                .map(|_| ()),
            Err(SimulationError::Geometry(GeometryError::Overflow))
        );
    }

    #[test]
    fn budget_exhausted() {
        let config = SimulationConfig {
            stop: StopCriteria::arrivals(3),
            ..SimulationConfig::default()
        };
        let sim = CoverageSimulator::with_size(10, 10, config).unwrap();
        let source = vec![fp(0, 0, 1, 1), fp(1, 0, 2, 1), fp(2, 0, 3, 1), fp(3, 0, 4, 1)];
        let result = sim.run(source).unwrap();
        assert_eq!(result.state, SimulationState::BudgetExhausted);
        assert_eq!(result.arrivals, 3);
        assert_eq!(result.covered_area, 3);
        assert_eq!(result.gap_area(), 97);
    }

    #[test]
    fn zero_budget_stops_immediately() {
        let config = SimulationConfig {
            stop: StopCriteria::arrivals(0),
            ..SimulationConfig::default()
        };
        let sim = CoverageSimulator::with_size(10, 10, config).unwrap();
        assert_eq!(sim.state(), SimulationState::BudgetExhausted);
    }

    #[test]
    fn zero_rectangle_limit_is_fatal() {
        let config = SimulationConfig {
            stop: StopCriteria {
                max_rectangles: Some(0),
                ..StopCriteria::default()
            },
            ..SimulationConfig::default()
        };
        assert_eq!(
            CoverageSimulator::with_size(10, 10, config).map(|_| ()),
            Err(SimulationError::ZeroRectangleLimit)
        );
    }

    #[test]
    fn finite_source_runs_dry() {
        let result = sim().run(vec![fp(0, 0, 2, 2)]).unwrap();
        assert_eq!(result.state, SimulationState::SourceExhausted);
        assert_eq!(result.arrivals, 1);
    }

    #[test]
    fn rectangle_limit() {
        let config = SimulationConfig {
            stop: StopCriteria {
                max_rectangles: Some(2),
                ..StopCriteria::default()
            },
            ..SimulationConfig::default()
        };
        let sim = CoverageSimulator::with_size(10, 10, config).unwrap();
        let source = vec![fp(0, 0, 1, 1), fp(0, 0, 1, 1), fp(5, 5, 6, 6), fp(7, 7, 8, 8)];
        let result = sim.run(source).unwrap();
        assert_eq!(result.state, SimulationState::RectangleLimit);
        assert_eq!(result.rectangles(), 2);
        assert_eq!(result.arrivals, 3);
        assert_eq!(result.rejected, 1);
    }

    #[test]
    fn target_area() {
        let config = SimulationConfig {
            stop: StopCriteria {
                target_area: Some(30),
                ..StopCriteria::default()
            },
            ..SimulationConfig::default()
        };
        let sim = CoverageSimulator::with_size(10, 10, config).unwrap();
        let source = vec![fp(0, 0, 5, 5), fp(5, 0, 7, 3), fp(0, 5, 10, 10)];
        let result = sim.run(source).unwrap();
        assert_eq!(result.state, SimulationState::TargetReached);
        assert_eq!(result.covered_area, 31);
        assert_eq!(result.arrivals, 2);
    }

    #[test]
    fn reset_clears_state() {
        let mut sim = sim();
        sim.step(fp(0, 0, 10, 10)).unwrap();
        sim.reset();
        assert_eq!(sim.state(), SimulationState::Running);
        assert_eq!(sim.arrivals(), 0);
        assert!(sim.coverage().is_empty());
    }
}

#[cfg(test)]
mod invariants {
    use super::*;

    fn random_run(engine: TrimEngineKind, seed: u64) -> SimulationResult {
        let region = Region::new(12, 9).unwrap();
        let config = SimulationConfig {
            stop: StopCriteria::arrivals(400),
            trim: TrimConfig {
                engine,
                ..TrimConfig::default()
            },
            ..SimulationConfig::default()
        };
        let mut sim = CoverageSimulator::new(region, config).unwrap();
        let mut previous = 0;
        for footprint in CandidateStream::new(&UniformFootprints, region, seed) {
            if sim.is_finished() {
                break;
            }
            sim.step(footprint).unwrap();
            assert!(sim.covered_area() >= previous, "coverage went down");
            assert!(sim.covered_area() <= region.area());
            previous = sim.covered_area();
        }
        sim.into_result()
    }

    #[test]
    fn accepted_rects_never_overlap() {
        for seed in 0..20 {
            let result = random_run(TrimEngineKind::Guillotine, seed);
            assert_pairwise_disjoint(result.coverage.as_slice());
            for rect in result.coverage.iter() {
                assert!(result.region.contains(rect));
            }
        }
    }

    #[test]
    fn area_is_conserved() {
        for seed in 0..20 {
            let result = random_run(TrimEngineKind::Guillotine, seed);
            let sum: u64 = result.coverage.iter().map(Rect::area).sum();
            assert_eq!(result.covered_area, sum);
            let grid = CoverageGrid::render(&result.coverage);
            assert_eq!(grid.covered_cells(), sum);
        }
    }

    #[test]
    fn engines_produce_identical_runs() {
        for seed in 0..10 {
            let g = random_run(TrimEngineKind::Guillotine, seed);
            let h = random_run(TrimEngineKind::Histogram, seed);
            assert_eq!(g, h);
        }
    }
}
