//! Accepted tower rectangles and queries against them.
//!
//! [`CoverageSet`] owns the rectangles accepted inside one region and keeps
//! them pairwise disjoint; [`CoverageGrid`] is a per-cell view of the same set.

use crate::geometry::{Area, Coord, Rect, Region};

pub mod errors;
mod grid;

pub use errors::CoverageError;
pub use grid::CoverageGrid;


/// Ordered collection of pairwise non-overlapping rectangles inside a region.
///
/// Rectangles are kept in acceptance order, so the index of a rectangle is
/// its tower number. The covered area is tracked with a running counter; as
/// members never overlap and never leave the region, it always equals the
/// area of their union and never exceeds the area of the region.
///
/// # Complexity
/// - `accept`: O(n) overlap check against all members
/// - `overlapping`: O(n)
/// - `total_area`, `is_full`: O(1)
///
/// # Examples
///
/// ```
/// use towercover::coverage::CoverageSet;
/// use towercover::geometry::{Rect, Region};
///
/// let region = Region::new(10, 10).unwrap();
/// let mut set = CoverageSet::new(region);
///
/// set.accept(Rect::new(0, 0, 5, 5).unwrap()).unwrap();
/// set.accept(Rect::new(5, 0, 10, 5).unwrap()).unwrap();
/// assert_eq!(set.total_area(), 50);
///
/// // A candidate straddling both members is blocked by both.
/// let blockers = set.overlapping_vec(&Rect::new(4, 4, 6, 6).unwrap());
/// assert_eq!(blockers.len(), 2);
///
/// // Overlapping accepts are rejected.
/// assert!(set.accept(Rect::new(4, 4, 6, 6).unwrap()).is_err());
///
/// // So are rectangles sticking out of the region.
/// assert!(set.accept(Rect::new(8, 8, 12, 9).unwrap()).is_err());
/// assert!(!set.is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageSet {
    region: Region,
    rects: Vec<Rect>,
    total_area: Area,
}

impl CoverageSet {
    /// Creates an empty set for `region`.
    pub fn new(region: Region) -> Self {
        Self {
            region,
            rects: Vec::new(),
            total_area: 0,
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Iterates over all members that overlap `candidate`, with their index.
    pub fn overlapping<'a>(
        &'a self,
        candidate: &'a Rect,
    ) -> impl Iterator<Item = (usize, &'a Rect)> + 'a {
        self.rects
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.intersects(candidate))
    }

    /// Blockers of `candidate` collected into a Vec.
    ///
    /// An empty result means the candidate can be accepted as is.
    pub fn overlapping_vec(&self, candidate: &Rect) -> Vec<Rect> {
        self.overlapping(candidate).map(|(_, r)| *r).collect()
    }

    /// Returns true if `candidate` overlaps no member.
    pub fn is_free(&self, candidate: &Rect) -> bool {
        self.overlapping(candidate).next().is_none()
    }

    /// Adds a rectangle to the set.
    ///
    /// The caller is expected to have trimmed `rect` against the current
    /// members already.
    ///
    /// # Errors
    ///
    /// - [`CoverageError::OutsideRegion`] if `rect` is not contained in the
    ///   region.
    /// - [`CoverageError::InvariantViolation`] if `rect` overlaps a member.
    ///
    /// On error the set is left unchanged.
    pub fn accept(&mut self, rect: Rect) -> Result<(), CoverageError> {
        if !self.region.contains(&rect) {
            return Err(CoverageError::OutsideRegion {
                candidate: rect,
                region: self.region,
            });
        }
        if let Some((index, existing)) = self.overlapping(&rect).next() {
            return Err(CoverageError::InvariantViolation {
                candidate: rect,
                existing: *existing,
                index,
            });
        }
        self.rects.push(rect);
        self.total_area += rect.area();
        Ok(())
    }

    /// Sum of member areas.
    pub fn total_area(&self) -> Area {
        self.total_area
    }

    /// Returns true when the members cover the whole region.
    pub fn is_full(&self) -> bool {
        self.total_area == self.region.area()
    }

    /// Uncovered area of the region.
    pub fn gap_area(&self) -> Area {
        self.region.area().saturating_sub(self.total_area)
    }

    pub fn get(&self, index: usize) -> Option<&Rect> {
        self.rects.get(index)
    }

    /// Member rectangles in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.rects.iter()
    }

    pub fn as_slice(&self) -> &[Rect] {
        &self.rects
    }

    /// Index of the member covering the unit cell at `(x, y)`, if any.
    pub fn owner_of_cell(&self, x: Coord, y: Coord) -> Option<usize> {
        self.rects.iter().position(|r| r.contains_cell(x, y))
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.total_area = 0;
    }
}

// =============================================================================
// CoverageSet Serde Support
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct CoverageRef<'a> {
        region: &'a Region,
        rects: &'a [Rect],
    }

    #[derive(Deserialize)]
    struct CoverageData {
        region: Region,
        rects: Vec<Rect>,
    }

    impl Serialize for CoverageSet {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            CoverageRef {
                region: &self.region,
                rects: &self.rects,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for CoverageSet {
        /// Rebuilds the set through [`CoverageSet::accept`], so overlapping
        /// or out-of-region members are rejected.
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let data = CoverageData::deserialize(deserializer)?;
            let mut set = CoverageSet::new(data.region);
            for rect in data.rects {
                set.accept(rect).map_err(de::Error::custom)?;
            }
            Ok(set)
        }
    }
}
