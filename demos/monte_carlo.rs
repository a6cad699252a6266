//! Estimates the expected number of towers needed to cover a region.
//!
//! Run with: `cargo run --release --example monte_carlo -- [trials] [width] [height]`

use std::time::Duration;

use towercover::experiment::{ExperimentConfig, ExperimentRunner};
use towercover::generator::{FixedSizeFootprints, UniformFootprints};
use towercover::geometry::Region;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("towercover=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let trials = args.first().map(|s| s.parse()).transpose()?.unwrap_or(1000);
    let width = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(10);
    let height = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(10);

    let region = Region::new(width, height)?;
    let config = ExperimentConfig {
        trials,
        base_seed: 12345,
        time_budget: Some(Duration::from_secs(60)),
        ..ExperimentConfig::default()
    };

    let uniform = ExperimentRunner::new(region, UniformFootprints, config.clone())?.run();
    println!("{uniform}\n");

    let fixed = ExperimentRunner::new(region, FixedSizeFootprints::new(2, 2), config)?.run();
    println!("{fixed}");

    Ok(())
}
