//! The fixed bounding rectangle a simulation tries to cover.

use std::fmt::Display;

use super::error::GeometryError;
use super::rect::{Area, Coord, Rect};

/// Bounding rectangle anchored at the origin.
///
/// Every candidate is clipped to the region and every accepted rectangle lies
/// inside it. A region never changes during a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RegionSize", into = "RegionSize"))]
pub struct Region {
    bounds: Rect,
}

/// Serialized form of a [`Region`]: just its size.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RegionSize {
    width: Coord,
    height: Coord,
}

#[cfg(feature = "serde")]
impl TryFrom<RegionSize> for Region {
    type Error = GeometryError;

    fn try_from(size: RegionSize) -> Result<Self, Self::Error> {
        Region::new(size.width, size.height)
    }
}

#[cfg(feature = "serde")]
impl From<Region> for RegionSize {
    fn from(region: Region) -> Self {
        Self {
            width: region.width(),
            height: region.height(),
        }
    }
}

impl Region {
    /// Creates the region `[0, width) × [0, height)`.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidRegion`] if either dimension is not positive.
    /// - [`GeometryError::Overflow`] if the area does not fit in [`Area`].
    pub fn new(width: Coord, height: Coord) -> Result<Self, GeometryError> {
        if width <= 0 || height <= 0 {
            return Err(GeometryError::InvalidRegion { width, height });
        }
        Ok(Self {
            bounds: Rect::new(0, 0, width, height)?,
        })
    }

    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    pub const fn width(&self) -> Coord {
        self.bounds.width()
    }

    pub const fn height(&self) -> Coord {
        self.bounds.height()
    }

    pub const fn area(&self) -> Area {
        self.bounds.area()
    }

    /// Clips `rect` to the region; `None` if nothing is left.
    pub fn clip(&self, rect: &Rect) -> Option<Rect> {
        rect.clip(&self.bounds)
    }

    pub const fn contains(&self, rect: &Rect) -> bool {
        self.bounds.contains(rect)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}
