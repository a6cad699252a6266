//! Walks through a small coverage simulation arrival by arrival.
//!
//! Run with: `RUST_LOG=towercover=debug cargo run --example coverage_walkthrough`

use towercover::algorithms::TrimEngineKind;
use towercover::coverage::CoverageGrid;
use towercover::generator::{CandidateStream, UniformFootprints};
use towercover::geometry::{Footprint, Region};
use towercover::simulation::{ArrivalOutcome, CoverageSimulator, SimulationConfig, StopCriteria};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("towercover=info")),
        )
        .init();

    println!("=== Tower Coverage Walkthrough ===\n");

    let region = Region::new(10, 10)?;
    let mut sim = CoverageSimulator::new(region, SimulationConfig::default())?;
    println!("Region: {region} ({} cells)", region.area());

    // Hand-picked arrivals first
    println!("\n--- Scripted Arrivals ---");
    let scripted = [
        Footprint::new(0, 0, 5, 5),
        Footprint::new(3, 3, 5, 5),
        Footprint::new(1, 1, 2, 2),
        Footprint::new(8, -2, 4, 4),
        Footprint::new(4, 4, 0, 3),
    ];
    for footprint in scripted {
        let outcome = sim.step(footprint)?;
        println!("  {:?} -> {}", footprint, describe(&outcome));
    }
    println!("\n{}", CoverageGrid::render(sim.coverage()));

    // Then random towers until the region is covered
    println!("\n--- Random Arrivals ---");
    sim.drive(CandidateStream::new(&UniformFootprints, region, 2024))?;
    let result = sim.into_result();
    println!("{result}");
    println!("\n{}", CoverageGrid::render(&result.coverage));

    // Both trimming engines agree on every arrival
    println!("\n--- Engine Comparison ---");
    for engine in [TrimEngineKind::Guillotine, TrimEngineKind::Histogram] {
        let mut config = SimulationConfig {
            stop: StopCriteria::arrivals(10_000),
            ..SimulationConfig::default()
        };
        config.trim.engine = engine;
        let result = CoverageSimulator::new(region, config)?
            .run(CandidateStream::new(&UniformFootprints, region, 7))?;
        println!(
            "  {engine:?}: {} arrivals, {} rectangles, state {}",
            result.arrivals,
            result.rectangles(),
            result.state
        );
    }

    Ok(())
}

fn describe(outcome: &ArrivalOutcome) -> String {
    match outcome {
        ArrivalOutcome::Accepted { rect, trimmed: false } => format!("accepted {rect}"),
        ArrivalOutcome::Accepted { rect, trimmed: true } => format!("trimmed to {rect}"),
        ArrivalOutcome::Rejected => "rejected (fully covered)".to_string(),
        ArrivalOutcome::Skipped(reason) => format!("skipped ({reason:?})"),
        ArrivalOutcome::Pathological(e) => format!("dropped: {e}"),
    }
}
