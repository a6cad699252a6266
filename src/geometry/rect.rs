//! Axis-aligned integer rectangle.

use std::fmt::Display;

use super::error::GeometryError;

/// Coordinate type shared by every geometric value in the crate.
pub type Coord = i64;

/// Area type; rectangles always have strictly positive area.
pub type Area = u64;

/// Half-open rectangle `[x0, x1) × [y0, y1)` with `x0 < x1` and `y0 < y1`.
/// Width, height and area always fit their types, so the accessors never
/// overflow.
///
/// Zero-area rectangles are unrepresentable: every constructor rejects them,
/// and operations that could produce one (`clip`, `intersection`) return
/// `None` instead.
///
/// Two rectangles overlap only when both projections overlap with positive
/// measure, so rectangles that share an edge or a corner are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rect {
    x0: Coord,
    y0: Coord,
    x1: Coord,
    y1: Coord,
}

impl Rect {
    /// Creates the rectangle spanning `[x0, x1) × [y0, y1)`.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::Degenerate`] when either side has non-positive
    ///   length.
    /// - [`GeometryError::Overflow`] when a side does not fit in [`Coord`] or
    ///   the area does not fit in [`Area`].
    pub const fn new(x0: Coord, y0: Coord, x1: Coord, y1: Coord) -> Result<Self, GeometryError> {
        if !(x0 < x1 && y0 < y1) {
            return Err(GeometryError::Degenerate { x0, y0, x1, y1 });
        }
        match (x1.checked_sub(x0), y1.checked_sub(y0)) {
            (Some(w), Some(h)) if (w as Area).checked_mul(h as Area).is_some() => {
                Ok(Self { x0, y0, x1, y1 })
            }
            _ => Err(GeometryError::Overflow),
        }
    }

    /// Creates a rectangle from its lower-left corner and its size.
    pub fn from_origin_size(
        x: Coord,
        y: Coord,
        width: Coord,
        height: Coord,
    ) -> Result<Self, GeometryError> {
        let x1 = x.checked_add(width).ok_or(GeometryError::Overflow)?;
        let y1 = y.checked_add(height).ok_or(GeometryError::Overflow)?;
        Self::new(x, y, x1, y1)
    }

    /// Builds a rectangle without validation. Callers guarantee `x0 < x1`,
    /// `y0 < y1` and that the result fits inside an already valid rectangle.
    pub(crate) const fn new_unchecked(x0: Coord, y0: Coord, x1: Coord, y1: Coord) -> Self {
        debug_assert!(x0 < x1 && y0 < y1);
        Self { x0, y0, x1, y1 }
    }

    pub const fn x0(&self) -> Coord {
        self.x0
    }

    pub const fn y0(&self) -> Coord {
        self.y0
    }

    pub const fn x1(&self) -> Coord {
        self.x1
    }

    pub const fn y1(&self) -> Coord {
        self.y1
    }

    pub const fn width(&self) -> Coord {
        self.x1 - self.x0
    }

    pub const fn height(&self) -> Coord {
        self.y1 - self.y0
    }

    pub const fn area(&self) -> Area {
        self.width() as Area * self.height() as Area
    }

    /// Returns true if the interiors of `self` and `other` intersect.
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    /// Returns true if `other` lies entirely inside `self` (boundaries may touch).
    pub const fn contains(&self, other: &Rect) -> bool {
        self.x0 <= other.x0 && other.x1 <= self.x1 && self.y0 <= other.y0 && other.y1 <= self.y1
    }

    /// Returns true if the unit cell with lower-left corner `(x, y)` lies inside.
    pub const fn contains_cell(&self, x: Coord, y: Coord) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }

    /// Common part of `self` and `other`, or `None` when they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::new_unchecked(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        ))
    }

    /// Restricts `self` to `bounds`. `None` means the clip is empty.
    pub fn clip(&self, bounds: &Rect) -> Option<Rect> {
        self.intersection(bounds)
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})-({},{})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            x0: Coord,
            y0: Coord,
            x1: Coord,
            y1: Coord,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.x0, raw.y0, raw.x1, raw.y1).map_err(serde::de::Error::custom)
    }
}
