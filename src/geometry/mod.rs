//! Geometric primitives: rectangles, raw footprints and the bounding region.
//!
//! All coordinates are integers and all rectangles are half-open, so two
//! rectangles that merely touch along an edge never overlap.

mod error;
mod footprint;
mod rect;
mod region;

pub use error::GeometryError;
pub use footprint::Footprint;
pub use rect::{Area, Coord, Rect};
pub use region::Region;
