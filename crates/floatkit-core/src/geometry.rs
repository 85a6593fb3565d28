#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are viewport pixels (`f64`, origin at top-left). Signed
//! math is deliberate: an anchor can spill past a viewport edge, and the
//! resulting negative space measurements are meaningful to the selection
//! policies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cardinal placement direction relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    #[default]
    Bottom,
    /// To the left of the anchor.
    Left,
    /// To the right of the anchor.
    Right,
}

impl Side {
    /// All sides, in the enumeration order used for tie-breaking.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The opposite side, for flip-style fallbacks.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether this side stacks the panel vertically (above or below).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Stable lowercase name, as written to the presentation attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An axis-aligned rectangle in viewport coordinates.
///
/// Snapshots of anchor geometry are taken fresh for every evaluation and
/// never cached — the anchor may have moved between events.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (alias for x).
    #[inline]
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A width/height pair; the panel's required footprint.
///
/// Measured from the panel's current rendered size, which is valid even while
/// the panel is still hidden.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible window dimensions, read fresh for every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel gap between the anchor's edge and the panel.
///
/// The gap is written to the presentation surface alongside the chosen side
/// so external styling can consume it; it never influences which side wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// Horizontal gap, applied by left/right placements.
    pub x: f64,
    /// Vertical gap, applied by top/bottom placements.
    pub y: f64,
}

impl Gap {
    /// No gap.
    pub const NONE: Gap = Gap { x: 0.0, y: 0.0 };

    /// The same gap on both axes.
    #[must_use]
    pub const fn uniform(px: f64) -> Self {
        Self { x: px, y: px }
    }

    /// Independent horizontal and vertical gaps.
    #[must_use]
    pub const fn xy(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The component that applies along the given side's axis.
    #[must_use]
    pub const fn along(self, side: Side) -> f64 {
        if side.is_vertical() { self.y } else { self.x }
    }
}

impl Default for Gap {
    fn default() -> Self {
        Self::NONE
    }
}

/// Distance from the anchor's edge on `side` to the matching viewport edge.
///
/// For `Top` this is the space above the anchor, for `Bottom` the viewport
/// height minus the anchor's bottom edge, and likewise for the horizontal
/// sides. Pure function of its inputs; never fails. Zero or negative results
/// are valid and mean the anchor spills past that viewport edge.
#[must_use]
pub fn space_available(anchor: Rect, viewport: Viewport, side: Side) -> f64 {
    match side {
        Side::Top => anchor.top(),
        Side::Bottom => viewport.height - anchor.bottom(),
        Side::Left => anchor.left(),
        Side::Right => viewport.width - anchor.right(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_opposites() {
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Bottom.opposite(), Side::Top);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn side_axis() {
        assert!(Side::Top.is_vertical());
        assert!(Side::Bottom.is_vertical());
        assert!(!Side::Left.is_vertical());
        assert!(!Side::Right.is_vertical());
    }

    #[test]
    fn side_names() {
        let names: Vec<_> = Side::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["top", "bottom", "left", "right"]);
    }

    #[test]
    fn side_default_is_bottom() {
        assert_eq!(Side::default(), Side::Bottom);
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(100.0, 500.0, 50.0, 20.0);
        assert_eq!(r.left(), 100.0);
        assert_eq!(r.top(), 500.0);
        assert_eq!(r.right(), 150.0);
        assert_eq!(r.bottom(), 520.0);
    }

    #[test]
    fn space_per_side() {
        let anchor = Rect::new(100.0, 500.0, 50.0, 20.0);
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(space_available(anchor, viewport, Side::Top), 500.0);
        assert_eq!(space_available(anchor, viewport, Side::Bottom), 80.0);
        assert_eq!(space_available(anchor, viewport, Side::Left), 100.0);
        assert_eq!(space_available(anchor, viewport, Side::Right), 650.0);
    }

    #[test]
    fn space_negative_when_anchor_spills() {
        // Anchor hangs past the right and top viewport edges.
        let anchor = Rect::new(780.0, -10.0, 50.0, 20.0);
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(space_available(anchor, viewport, Side::Top), -10.0);
        assert_eq!(space_available(anchor, viewport, Side::Right), -30.0);
    }

    #[test]
    fn gap_along_axis() {
        let gap = Gap::xy(4.0, 8.0);
        assert_eq!(gap.along(Side::Top), 8.0);
        assert_eq!(gap.along(Side::Bottom), 8.0);
        assert_eq!(gap.along(Side::Left), 4.0);
        assert_eq!(gap.along(Side::Right), 4.0);
    }

    #[test]
    fn gap_uniform() {
        assert_eq!(Gap::uniform(6.0), Gap::xy(6.0, 6.0));
        assert_eq!(Gap::default(), Gap::NONE);
    }

    #[test]
    fn side_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Top).unwrap(), "\"top\"");
        let side: Side = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(side, Side::Right);
    }

    #[test]
    fn rect_serde_round_trip() {
        let r = Rect::new(1.5, 2.5, 3.0, 4.0);
        let json = serde_json::to_string(&r).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    mod invariants {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Opposite sides partition the viewport axis around the anchor:
            // their spaces sum to the leftover extent on that axis.
            #[test]
            fn opposite_spaces_sum_to_leftover(
                x in -500.0f64..1500.0,
                y in -500.0f64..1500.0,
                w in 0.0f64..600.0,
                h in 0.0f64..600.0,
                vw in 100.0f64..2000.0,
                vh in 100.0f64..2000.0,
            ) {
                let anchor = Rect::new(x, y, w, h);
                let viewport = Viewport::new(vw, vh);

                let vertical = space_available(anchor, viewport, Side::Top)
                    + space_available(anchor, viewport, Side::Bottom);
                let horizontal = space_available(anchor, viewport, Side::Left)
                    + space_available(anchor, viewport, Side::Right);

                prop_assert!((vertical - (vh - h)).abs() < 1e-9);
                prop_assert!((horizontal - (vw - w)).abs() < 1e-9);
            }

            #[test]
            fn space_is_finite_for_finite_inputs(
                x in -500.0f64..1500.0,
                y in -500.0f64..1500.0,
                w in 0.0f64..600.0,
                h in 0.0f64..600.0,
            ) {
                let anchor = Rect::new(x, y, w, h);
                let viewport = Viewport::new(800.0, 600.0);
                for side in Side::ALL {
                    prop_assert!(space_available(anchor, viewport, side).is_finite());
                }
            }
        }
    }
}
