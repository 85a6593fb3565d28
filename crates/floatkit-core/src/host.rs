#![forbid(unsafe_code)]

//! Host capability traits.
//!
//! The layout engine and presentation layer are collaborators, not parts of
//! this library. A host wires them in by implementing these traits; the
//! sampler and selection policies stay pure and unit-testable without a real
//! rendering surface.

use crate::geometry::{Gap, Rect, Side, Size, Viewport};

/// Live geometry queries for an anchored panel.
///
/// Every method returns a fresh snapshot. Callers must not cache results
/// across evaluations: the anchor may have moved, the viewport may have
/// resized, and the panel may have re-rendered at a different size.
pub trait GeometrySource {
    /// Bounding box of the anchor element, in viewport coordinates.
    fn anchor_rect(&self) -> Rect;

    /// Current visible window dimensions.
    fn viewport(&self) -> Viewport;

    /// The panel's required footprint, measured from its current (possibly
    /// still-hidden) rendered size.
    fn panel_footprint(&self) -> Size;
}

/// Presentation surface for the managed panel.
///
/// The placement attribute has a single writer: the controller's update path.
/// No other code may call [`apply_placement`](PanelSurface::apply_placement)
/// on a surface owned by a controller.
pub trait PanelSurface {
    /// Record the chosen side and gap as inspectable styling state.
    fn apply_placement(&mut self, side: Side, gap: Gap);

    /// Ask the native layer to present the panel.
    ///
    /// Returns `false` when the platform has no native show/hide toggle;
    /// callers then fall back to [`set_visible`](PanelSurface::set_visible).
    fn present(&mut self) -> bool;

    /// Ask the native layer to dismiss the panel. Returns `false` when
    /// unsupported, as for [`present`](PanelSurface::present).
    fn dismiss(&mut self) -> bool;

    /// Plain visibility fallback for surfaces without native toggling.
    fn set_visible(&mut self, visible: bool);

    /// Whether the panel is currently visible.
    fn is_visible(&self) -> bool;
}
