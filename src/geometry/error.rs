use thiserror::Error;

use super::rect::Coord;

/// Errors raised while building geometric values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Rectangle ({x0},{y0})-({x1},{y1}) has non-positive width or height")]
    Degenerate {
        x0: Coord,
        y0: Coord,
        x1: Coord,
        y1: Coord,
    },

    #[error("Region must have positive width and height, got {width}x{height}")]
    InvalidRegion { width: Coord, height: Coord },

    #[error("Rectangle corner overflows the coordinate range")]
    Overflow,
}
