//! Candidate sources: seeded streams of random tower footprints.
//!
//! A [`FootprintSampler`] describes the distribution of a single arrival and
//! [`CandidateStream`] turns it into an endless, reproducible iterator driven
//! by its own [`StdRng`]. Each trial builds its own stream from its own seed,
//! so trials share no random state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{Coord, Footprint, Region};

/// Distribution of a single tower footprint inside a region.
pub trait FootprintSampler: Send + Sync {
    /// Draws one footprint for `region`.
    fn sample<R: Rng + ?Sized>(&self, region: &Region, rng: &mut R) -> Footprint;

    /// Expected area of a sampled footprint after clipping to `region`.
    fn mean_area(&self, region: &Region) -> f64;

    /// Returns a short name for logs.
    fn name(&self) -> &str;
}

/// Uniform towers: origin uniform over the region's cells, then width and
/// height uniform among the sizes that keep the footprint inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformFootprints;

impl FootprintSampler for UniformFootprints {
    fn sample<R: Rng + ?Sized>(&self, region: &Region, rng: &mut R) -> Footprint {
        let x = rng.gen_range(0..region.width());
        let y = rng.gen_range(0..region.height());
        let width = rng.gen_range(1..=region.width() - x);
        let height = rng.gen_range(1..=region.height() - y);
        Footprint::new(x, y, width, height)
    }

    fn mean_area(&self, region: &Region) -> f64 {
        // E[width] = (W + 3) / 4, independently per axis.
        (region.width() as f64 + 3.0) * (region.height() as f64 + 3.0) / 16.0
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

/// Fixed-size towers placed uniformly among the positions where they fit.
///
/// A size larger than the region is anchored at the origin and clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedSizeFootprints {
    pub width: Coord,
    pub height: Coord,
}

impl FixedSizeFootprints {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }
}

impl FootprintSampler for FixedSizeFootprints {
    fn sample<R: Rng + ?Sized>(&self, region: &Region, rng: &mut R) -> Footprint {
        let x = rng.gen_range(0..=(region.width() - self.width).max(0));
        let y = rng.gen_range(0..=(region.height() - self.height).max(0));
        Footprint::new(x, y, self.width, self.height)
    }

    fn mean_area(&self, region: &Region) -> f64 {
        let w = self.width.clamp(0, region.width());
        let h = self.height.clamp(0, region.height());
        (w * h) as f64
    }

    fn name(&self) -> &str {
        "fixed-size"
    }
}

/// Endless seeded stream of footprints.
#[derive(Debug, Clone)]
pub struct CandidateStream<'a, S> {
    sampler: &'a S,
    region: Region,
    rng: StdRng,
}

impl<'a, S: FootprintSampler> CandidateStream<'a, S> {
    pub fn new(sampler: &'a S, region: Region, seed: u64) -> Self {
        Self {
            sampler,
            region,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S: FootprintSampler> Iterator for CandidateStream<'_, S> {
    type Item = Footprint;

    fn next(&mut self) -> Option<Footprint> {
        Some(self.sampler.sample(&self.region, &mut self.rng))
    }
}

/// Derives the seed of trial `trial` from an experiment's base seed.
pub fn trial_seed(base_seed: u64, trial: usize) -> u64 {
    let mut z = base_seed ^ (trial as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
