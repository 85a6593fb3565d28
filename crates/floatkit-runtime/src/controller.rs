#![forbid(unsafe_code)]

//! Reactive popover controller.
//!
//! [`Popover`] owns a live panel: it re-runs placement selection whenever
//! the anchor, panel, or viewport may have changed and writes the winning
//! side into the panel's presentation state. Each trigger — a resize signal,
//! a scroll signal, or an explicit [`show`](Popover::show) /
//! [`update`](Popover::update) — runs the full pipeline synchronously
//! (fresh geometry snapshot, selector, attribute write) with no suspension
//! points, so re-evaluations never interleave. Bursts of signals produce
//! bursts of recomputation; the pipeline is a cheap read-then-write.
//!
//! # Lifecycle
//!
//! `Created` → `Positioned` on the first recomputation; visibility is an
//! orthogonal axis owned by the panel surface. Destruction is terminal:
//! [`destroy`](Popover::destroy) consumes the controller, so operating on a
//! destroyed popover is a compile error rather than a runtime surprise. The
//! watcher registrations acquired at construction are released exactly once,
//! on destroy or drop, whichever comes first.
//!
//! # Failure Modes
//!
//! - **Re-entrant signals**: a surface that emits a layout signal from
//!   inside `apply_placement` re-enters the controller mid-pipeline and
//!   panics on the interior borrow. Signals come from external event
//!   sources between pipelines, never from within one.

use std::cell::RefCell;
use std::rc::Rc;

use floatkit_core::{GeometrySource, PanelSurface, Side};
use floatkit_placement::PopoverConfig;
use tracing::debug;
use web_time::Instant;

use crate::signal::{LayoutSignals, WatchGuard};

/// Controller lifecycle phase.
///
/// Visibility is not a phase: it is a separate axis owned by the panel
/// surface and driven by show/hide requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed; no placement written yet.
    Created,
    /// A placement has been computed and written at least once.
    Positioned,
}

struct ControllerInner<H, P> {
    config: PopoverConfig,
    geometry: H,
    surface: P,
    phase: Phase,
    active: Option<Side>,
}

impl<H: GeometrySource, P: PanelSurface> ControllerInner<H, P> {
    /// Full synchronous re-evaluation: fresh geometry snapshot, selector,
    /// attribute write. This is the single writer of the placement
    /// attribute.
    fn recompute(&mut self) {
        let started = Instant::now();
        let anchor = self.geometry.anchor_rect();
        let viewport = self.geometry.viewport();
        let footprint = self.geometry.panel_footprint();

        let side = self.config.select(anchor, viewport, footprint);
        self.surface.apply_placement(side, self.config.gap);
        self.active = Some(side);
        self.phase = Phase::Positioned;

        debug!(
            side = side.as_str(),
            duration_us = started.elapsed().as_micros() as u64,
            "placement recomputed"
        );
    }

    fn reveal(&mut self) {
        if !self.surface.present() {
            self.surface.set_visible(true);
        }
    }

    fn conceal(&mut self) {
        if !self.surface.dismiss() {
            self.surface.set_visible(false);
        }
    }
}

/// A live, anchored floating panel.
///
/// Construction wires the controller to the host's resize and scroll feeds;
/// every signal re-runs selection against fresh geometry. Evaluation holds
/// no memory of prior placements — flapping between two equally-scoring
/// sides under jitter is possible and accepted.
pub struct Popover<H: GeometrySource, P: PanelSurface> {
    inner: Rc<RefCell<ControllerInner<H, P>>>,
    watchers: Vec<WatchGuard>,
}

impl<H: GeometrySource + 'static, P: PanelSurface + 'static> Popover<H, P> {
    /// Build a controller over the given geometry and surface.
    ///
    /// The configuration is fixed from here on. Watchers on the resize and
    /// scroll feeds are acquired now and released exactly once, at
    /// destruction.
    pub fn new(config: PopoverConfig, geometry: H, surface: P, signals: &LayoutSignals) -> Self {
        let inner = Rc::new(RefCell::new(ControllerInner {
            config,
            geometry,
            surface,
            phase: Phase::Created,
            active: None,
        }));

        let watchers = vec![
            signals.resize.watch({
                let inner = Rc::clone(&inner);
                move || inner.borrow_mut().recompute()
            }),
            signals.scroll.watch({
                let inner = Rc::clone(&inner);
                move || inner.borrow_mut().recompute()
            }),
        ];

        Self { inner, watchers }
    }

    /// Recompute placement, then make the panel visible.
    ///
    /// Uses the surface's native presentation toggle when it reports one and
    /// silently falls back to the plain visibility flag otherwise.
    /// Idempotent when already visible.
    pub fn show(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.recompute();
        inner.reveal();
    }

    /// Conceal the panel. Idempotent when already hidden.
    pub fn hide(&self) {
        self.inner.borrow_mut().conceal();
    }

    /// Show when hidden, hide when visible.
    pub fn toggle(&self) {
        let visible = self.inner.borrow().surface.is_visible();
        if visible {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Recompute placement without touching visibility.
    pub fn update(&self) {
        self.inner.borrow_mut().recompute();
    }

    /// Tear the controller down.
    ///
    /// Releases both watcher registrations, conceals the panel, and consumes
    /// the handle so no further operation can be written against it.
    /// Dropping the controller performs the same teardown; `destroy` makes
    /// it explicit at the call site.
    pub fn destroy(self) {
        drop(self);
    }

    /// The most recently applied side, if a placement has been written.
    #[must_use]
    pub fn active_placement(&self) -> Option<Side> {
        self.inner.borrow().active
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.borrow().phase
    }

    /// Read-only access to the managed panel surface, e.g. for content
    /// population by the caller.
    pub fn with_panel<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        f(&self.inner.borrow().surface)
    }
}

impl<H: GeometrySource, P: PanelSurface> Drop for Popover<H, P> {
    fn drop(&mut self) {
        self.watchers.clear();
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.conceal();
        }
        debug!("popover destroyed; watchers released");
    }
}
