//! Trimming: shrink a candidate to the largest rectangle free of blockers.
//!
//! Given a candidate (already clipped to the region) and the accepted
//! rectangles overlapping it, a [`Trimmer`] returns the maximum-area
//! axis-aligned rectangle that lies inside the candidate and overlaps no
//! blocker, or `None` when nothing of positive area is left.
//!
//! Two engines are provided:
//! - [`GuillotineTrimmer`] - exact search over guillotine splits; cost depends
//!   on the number of blockers, not on coordinates.
//! - [`HistogramTrimmer`] - raster sweep over unit cells; cost depends on the
//!   candidate's area.
//!
//! Both select among equally large results with [`compare_preference`], so
//! they always agree.

mod error;
mod guillotine;
mod histogram;
mod ordering;

#[cfg(test)]
mod proptests;

pub use error::TrimError;
pub use guillotine::{GuillotineTrimmer, DEFAULT_MAX_LIVE};
pub use histogram::{HistogramTrimmer, DEFAULT_MAX_CELLS};
pub use ordering::{best_of, compare_preference};

use crate::geometry::{Area, Rect};

/// An engine that trims a candidate against its blockers.
pub trait Trimmer: Send + Sync {
    /// Returns the best rectangle inside `candidate` overlapping none of
    /// `blockers`, `Ok(None)` if no such rectangle has positive area.
    ///
    /// With no blockers the candidate is returned unchanged.
    ///
    /// # Errors
    ///
    /// A [`TrimError`] when the engine's resource cap is hit. This is
    /// recoverable; callers treat the arrival as yielding nothing.
    fn trim(&self, candidate: &Rect, blockers: &[Rect]) -> Result<Option<Rect>, TrimError>;

    /// Returns a short name for logs.
    fn name(&self) -> &str;
}

/// Selects the trimming engine used by a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrimEngineKind {
    #[default]
    Guillotine,
    Histogram,
}

/// Trimming configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrimConfig {
    /// Which engine to run.
    pub engine: TrimEngineKind,
    /// Cap on live rectangles for the guillotine search.
    pub max_live: usize,
    /// Cap on candidate cells for the histogram sweep.
    pub max_cells: Area,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            engine: TrimEngineKind::Guillotine,
            max_live: DEFAULT_MAX_LIVE,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// A configured trimming engine.
#[derive(Debug, Clone)]
pub enum TrimEngine {
    Guillotine(GuillotineTrimmer),
    Histogram(HistogramTrimmer),
}

impl TrimEngine {
    pub fn from_config(config: &TrimConfig) -> Self {
        match config.engine {
            TrimEngineKind::Guillotine => Self::Guillotine(GuillotineTrimmer::new(config.max_live)),
            TrimEngineKind::Histogram => Self::Histogram(HistogramTrimmer::new(config.max_cells)),
        }
    }
}

impl Default for TrimEngine {
    fn default() -> Self {
        Self::from_config(&TrimConfig::default())
    }
}

impl Trimmer for TrimEngine {
    fn trim(&self, candidate: &Rect, blockers: &[Rect]) -> Result<Option<Rect>, TrimError> {
        match self {
            Self::Guillotine(t) => t.trim(candidate, blockers),
            Self::Histogram(t) => t.trim(candidate, blockers),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Guillotine(t) => t.name(),
            Self::Histogram(t) => t.name(),
        }
    }
}
