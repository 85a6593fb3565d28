#![forbid(unsafe_code)]

//! First-fit placement with ordered fallbacks.

use floatkit_core::{Rect, Side, Size, Viewport, space_available};

use crate::required_space;

/// Choose the first candidate side whose available space fits the footprint.
///
/// Candidates are the preferred side followed by `fallbacks`, in order. A
/// side fits when its available space is at least the footprint's extent
/// along that side's axis. When nothing fits, the candidate with the
/// strictly greatest available space wins; exact ties keep the earliest
/// candidate in the preferred-then-fallback sequence.
///
/// Always returns a side.
#[must_use]
pub fn first_fit(
    preferred: Side,
    fallbacks: &[Side],
    anchor: Rect,
    viewport: Viewport,
    footprint: Size,
) -> Side {
    let mut best = preferred;
    let mut best_space = f64::NEG_INFINITY;

    for side in std::iter::once(preferred).chain(fallbacks.iter().copied()) {
        let space = space_available(anchor, viewport, side);
        if space >= required_space(footprint, side) {
            return side;
        }
        if space > best_space {
            best = side;
            best_space = space;
        }
    }
    best
}
