//! Raster trimming: largest free rectangle via per-row histograms.
//!
//! The candidate is split into unit cells and the cells covered by blockers
//! are marked. Sweeping rows bottom to top, `heights[i]` counts the free
//! cells stacked in column `i` ending at the current row; the largest
//! rectangle under that histogram (monotonic stack) is the largest free
//! rectangle whose top edge is the current row.
//!
//! Memory and time grow with the candidate's area, so this engine suits
//! small regions. It doubles as an independent check of the guillotine
//! search.

use super::error::TrimError;
use super::ordering::compare_preference;
use super::Trimmer;
use crate::geometry::{Area, Coord, Rect};

/// Default cap on the number of cells a candidate may span.
pub const DEFAULT_MAX_CELLS: Area = 1 << 20;

#[derive(Debug, Clone)]
pub struct HistogramTrimmer {
    max_cells: Area,
}

impl HistogramTrimmer {
    pub fn new(max_cells: Area) -> Self {
        Self { max_cells }
    }

    pub fn max_cells(&self) -> Area {
        self.max_cells
    }
}

impl Default for HistogramTrimmer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CELLS)
    }
}

impl Trimmer for HistogramTrimmer {
    fn trim(&self, candidate: &Rect, blockers: &[Rect]) -> Result<Option<Rect>, TrimError> {
        if blockers.is_empty() {
            return Ok(Some(*candidate));
        }
        if candidate.area() > self.max_cells {
            return Err(TrimError::CandidateTooLarge {
                cells: candidate.area(),
                cap: self.max_cells,
            });
        }

        let width = candidate.width() as usize;
        let height = candidate.height() as usize;
        let mut blocked = vec![false; width * height];
        for blocker in blockers {
            let Some(part) = blocker.intersection(candidate) else {
                continue;
            };
            for y in part.y0()..part.y1() {
                let row = (y - candidate.y0()) as usize * width;
                for x in part.x0()..part.x1() {
                    blocked[row + (x - candidate.x0()) as usize] = true;
                }
            }
        }

        let mut heights = vec![0usize; width];
        let mut best: Option<Rect> = None;
        for row in 0..height {
            for (col, h) in heights.iter_mut().enumerate() {
                *h = if blocked[row * width + col] { 0 } else { *h + 1 };
            }
            for (left, right, h) in histogram_rectangles(&heights) {
                let top = candidate.y0() + row as Coord + 1;
                let rect = Rect::new_unchecked(
                    candidate.x0() + left as Coord,
                    top - h as Coord,
                    candidate.x0() + right as Coord,
                    top,
                );
                if best.map_or(true, |b| compare_preference(&rect, &b).is_lt()) {
                    best = Some(rect);
                }
            }
        }

        Ok(best)
    }

    fn name(&self) -> &str {
        "histogram"
    }
}

/// Rectangles `(left, right, height)` spanned by each bar of the histogram
/// with positive height.
///
/// For every bar the span is extended while neighbours are at least as tall,
/// which covers every maximal rectangle under the histogram at least once.
fn histogram_rectangles(heights: &[usize]) -> Vec<(usize, usize, usize)> {
    let mut out = Vec::new();
    let mut stack: Vec<usize> = Vec::with_capacity(heights.len());

    for i in 0..=heights.len() {
        let current = heights.get(i).copied().unwrap_or(0);
        while let Some(&top) = stack.last() {
            if heights[top] <= current {
                break;
            }
            stack.pop();
            let left = stack.last().map_or(0, |&s| s + 1);
            out.push((left, i, heights[top]));
        }
        stack.push(i);
    }

    out
}
