//! Raw arrivals as produced by a candidate source.

use super::error::GeometryError;
use super::rect::{Coord, Rect};
use super::region::Region;

/// A tower footprint before validation: lower-left corner plus size.
///
/// Unlike [`Rect`], a footprint may be degenerate or stick out of the region.
/// The simulator turns it into a candidate with [`Footprint::to_candidate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
}

impl Footprint {
    pub const fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Validates the footprint as a rectangle.
    pub fn to_rect(&self) -> Result<Rect, GeometryError> {
        Rect::from_origin_size(self.x, self.y, self.width, self.height)
    }

    /// Validates and clips to `region`.
    ///
    /// Returns `Ok(None)` when the footprint is valid but lies entirely
    /// outside the region.
    pub fn to_candidate(&self, region: &Region) -> Result<Option<Rect>, GeometryError> {
        Ok(region.clip(&self.to_rect()?))
    }
}

impl From<Rect> for Footprint {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x0(), rect.y0(), rect.width(), rect.height())
    }
}
