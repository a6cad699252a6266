//! Preference order between valid trimmed rectangles.

use std::cmp::Ordering;

use crate::geometry::Rect;

/// Compares two rectangles by preference; `Less` means `a` is preferred.
///
/// Larger area first, then larger width, then smaller `(x0, y0)`.
pub fn compare_preference(a: &Rect, b: &Rect) -> Ordering {
    b.area()
        .cmp(&a.area())
        .then_with(|| b.width().cmp(&a.width()))
        .then_with(|| (a.x0(), a.y0()).cmp(&(b.x0(), b.y0())))
}

/// Most preferred rectangle of `rects`, if any.
pub fn best_of<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    rects.into_iter().min_by(compare_preference)
}
