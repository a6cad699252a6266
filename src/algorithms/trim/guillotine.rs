//! Guillotine-split search for the largest free sub-rectangle.
//!
//! Any rectangle disjoint from a blocker lies entirely on one side of it
//! (left, right, below or above). Splitting every live rectangle along the
//! four edges of each blocker in turn therefore keeps every maximal free
//! rectangle of the candidate inside some surviving piece, and the best
//! surviving piece is the exact answer.
//!
//! Pieces from the four sides overlap each other, which is fine: only one of
//! them is ever accepted.

use tracing::trace;

use super::error::TrimError;
use super::ordering::{best_of, compare_preference};
use super::Trimmer;
use crate::geometry::Rect;

/// Default cap on the number of live rectangles during a split.
pub const DEFAULT_MAX_LIVE: usize = 4096;

/// Exact trimming engine based on guillotine splits.
#[derive(Debug, Clone)]
pub struct GuillotineTrimmer {
    max_live: usize,
}

impl GuillotineTrimmer {
    /// Creates a trimmer that gives up once more than `max_live` pieces are
    /// alive at the same time.
    pub fn new(max_live: usize) -> Self {
        Self { max_live }
    }

    pub fn max_live(&self) -> usize {
        self.max_live
    }
}

impl Default for GuillotineTrimmer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LIVE)
    }
}

impl Trimmer for GuillotineTrimmer {
    fn trim(&self, candidate: &Rect, blockers: &[Rect]) -> Result<Option<Rect>, TrimError> {
        if blockers.is_empty() {
            return Ok(Some(*candidate));
        }

        let mut live = vec![*candidate];
        for blocker in blockers {
            let mut next = Vec::with_capacity(live.len() * 4);
            for piece in &live {
                if piece.intersects(blocker) {
                    split_around(piece, blocker, &mut next);
                } else {
                    next.push(*piece);
                }
            }
            prune(&mut next);

            if next.len() > self.max_live {
                return Err(TrimError::PathologicalSplit {
                    live: next.len(),
                    cap: self.max_live,
                });
            }
            if next.is_empty() {
                trace!(%candidate, %blocker, "candidate fully covered");
                return Ok(None);
            }
            live = next;
        }

        Ok(best_of(live))
    }

    fn name(&self) -> &str {
        "guillotine"
    }
}

/// Pushes the parts of `live` strictly left of, right of, below and above
/// `blocker`. Each part spans the full extent of `live` on the other axis.
///
/// `blocker` must overlap `live`.
pub(crate) fn split_around(live: &Rect, blocker: &Rect, out: &mut Vec<Rect>) {
    debug_assert!(live.intersects(blocker));

    if blocker.x0() > live.x0() {
        out.push(Rect::new_unchecked(live.x0(), live.y0(), blocker.x0(), live.y1()));
    }
    if blocker.x1() < live.x1() {
        out.push(Rect::new_unchecked(blocker.x1(), live.y0(), live.x1(), live.y1()));
    }
    if blocker.y0() > live.y0() {
        out.push(Rect::new_unchecked(live.x0(), live.y0(), live.x1(), blocker.y0()));
    }
    if blocker.y1() < live.y1() {
        out.push(Rect::new_unchecked(live.x0(), blocker.y1(), live.x1(), live.y1()));
    }
}

/// Removes duplicates and pieces contained in another piece.
///
/// A contained piece is strictly smaller than its container, so it can never
/// be selected. Leaves `live` sorted by preference.
fn prune(live: &mut Vec<Rect>) {
    live.sort_unstable_by(compare_preference);
    live.dedup();

    let mut kept: Vec<Rect> = Vec::with_capacity(live.len());
    for rect in live.drain(..) {
        if !kept.iter().any(|k| k.contains(&rect)) {
            kept.push(rect);
        }
    }
    *live = kept;
}
