#![forbid(unsafe_code)]

//! Test doubles for exercising controllers without a real layout engine.
//!
//! [`SharedGeometry`] plays the layout engine: tests keep a clone and move
//! the anchor, resize the viewport, or re-measure the panel between
//! evaluations. [`RecordingSurface`] plays the presentation layer and logs
//! every mutation for assertions, optionally pretending the platform has no
//! native show/hide toggle.

use std::cell::RefCell;
use std::rc::Rc;

use floatkit_core::{Gap, GeometrySource, PanelSurface, Rect, Side, Size, Viewport};

/// Shared mutable geometry snapshot.
#[derive(Debug, Clone)]
pub struct SharedGeometry {
    state: Rc<RefCell<GeometryState>>,
}

#[derive(Debug, Clone, Copy)]
struct GeometryState {
    anchor: Rect,
    viewport: Viewport,
    footprint: Size,
}

impl SharedGeometry {
    /// Create a geometry source with the given initial snapshot.
    #[must_use]
    pub fn new(anchor: Rect, viewport: Viewport, footprint: Size) -> Self {
        Self {
            state: Rc::new(RefCell::new(GeometryState {
                anchor,
                viewport,
                footprint,
            })),
        }
    }

    /// Move or resize the anchor.
    pub fn set_anchor(&self, anchor: Rect) {
        self.state.borrow_mut().anchor = anchor;
    }

    /// Resize the viewport.
    pub fn set_viewport(&self, viewport: Viewport) {
        self.state.borrow_mut().viewport = viewport;
    }

    /// Re-measure the panel.
    pub fn set_footprint(&self, footprint: Size) {
        self.state.borrow_mut().footprint = footprint;
    }
}

impl GeometrySource for SharedGeometry {
    fn anchor_rect(&self) -> Rect {
        self.state.borrow().anchor
    }

    fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn panel_footprint(&self) -> Size {
        self.state.borrow().footprint
    }
}

#[derive(Debug, Default)]
struct SurfaceState {
    placements: Vec<(Side, Gap)>,
    visible: bool,
    native: bool,
    native_toggles: u32,
    fallback_toggles: u32,
}

/// A presentation surface that records every mutation.
///
/// Clones share state, so a test can keep one handle while the controller
/// owns another.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl RecordingSurface {
    /// A surface with native show/hide support.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SurfaceState {
                native: true,
                ..SurfaceState::default()
            })),
        }
    }

    /// A surface without native toggling; visibility changes go through the
    /// plain fallback path.
    #[must_use]
    pub fn without_native_toggle() -> Self {
        Self {
            state: Rc::new(RefCell::new(SurfaceState::default())),
        }
    }

    /// Every placement write, in order.
    #[must_use]
    pub fn placements(&self) -> Vec<(Side, Gap)> {
        self.state.borrow().placements.clone()
    }

    /// The most recently written side, if any.
    #[must_use]
    pub fn last_placement(&self) -> Option<Side> {
        self.state.borrow().placements.last().map(|(side, _)| *side)
    }

    /// Current visibility.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.state.borrow().visible
    }

    /// How many times the native toggle ran.
    #[must_use]
    pub fn native_toggles(&self) -> u32 {
        self.state.borrow().native_toggles
    }

    /// How many times the fallback toggle ran.
    #[must_use]
    pub fn fallback_toggles(&self) -> u32 {
        self.state.borrow().fallback_toggles
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSurface for RecordingSurface {
    fn apply_placement(&mut self, side: Side, gap: Gap) {
        self.state.borrow_mut().placements.push((side, gap));
    }

    fn present(&mut self) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.native {
            return false;
        }
        state.visible = true;
        state.native_toggles += 1;
        true
    }

    fn dismiss(&mut self) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.native {
            return false;
        }
        state.visible = false;
        state.native_toggles += 1;
        true
    }

    fn set_visible(&mut self, visible: bool) {
        let mut state = self.state.borrow_mut();
        state.visible = visible;
        state.fallback_toggles += 1;
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }
}
