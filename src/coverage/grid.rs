//! Raster view of a coverage set.

use std::fmt::Display;

use super::CoverageSet;
use crate::geometry::{Area, Coord};

/// Per-cell ownership map of a coverage set's region.
///
/// Cell `(x, y)` holds the index of the accepted rectangle covering the unit
/// square `[x, x+1) × [y, y+1)`, or `None` for a gap. Row `y = 0` is the
/// bottom of the region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<usize>>,
}

impl CoverageGrid {
    /// Rasterises `set` over its region.
    ///
    /// Cost is proportional to the area of the region, so this is meant for
    /// small regions (tests, demos).
    pub fn render(set: &CoverageSet) -> Self {
        let region = set.region();
        let width = region.width() as usize;
        let height = region.height() as usize;
        let mut cells = vec![None; width * height];
        for (index, rect) in set.iter().enumerate() {
            for y in rect.y0()..rect.y1() {
                for x in rect.x0()..rect.x1() {
                    cells[y as usize * width + x as usize] = Some(index);
                }
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Owner of the cell at `(x, y)`; `None` outside the grid or for a gap.
    pub fn get(&self, x: Coord, y: Coord) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Number of cells owned by some rectangle, i.e. the area of the union.
    pub fn covered_cells(&self) -> Area {
        self.cells.iter().filter(|c| c.is_some()).count() as Area
    }

    /// Cells of row `y`, left to right.
    pub(crate) fn row(&self, y: usize) -> &[Option<usize>] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }
}

impl Display for CoverageGrid {
    /// Draws the grid top row first: `.` for gaps, and a symbol cycling
    /// through `0-9a-zA-Z` per owning rectangle.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SYMBOLS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
        for y in (0..self.height).rev() {
            for owner in self.row(y) {
                let c = match owner {
                    Some(i) => SYMBOLS[i % SYMBOLS.len()] as char,
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
