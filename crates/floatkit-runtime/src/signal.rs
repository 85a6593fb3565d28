#![forbid(unsafe_code)]

//! Layout-change signals with RAII watcher guards.
//!
//! A [`Signal`] is a value-less notification source for one class of
//! layout-affecting event — an element resize, an ancestor scroll. Watchers
//! register callbacks and hold a [`WatchGuard`]; dropping the guard
//! unregisters the callback. Dead watchers are pruned lazily on the next
//! emit.
//!
//! # Failure Modes
//!
//! - **Re-entrant registration**: calling `watch()` from inside a watcher
//!   callback panics (RefCell borrow rules). Watcher graphs are wired at
//!   construction time, not mid-notification.
//! - **Guard leak**: a `WatchGuard` stored indefinitely keeps its callback
//!   live; release it (or the controller owning it) to sever the feed.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

type CallbackRc = Rc<dyn Fn()>;
type CallbackWeak = Weak<dyn Fn()>;

struct SignalInner {
    emits: u64,
    watchers: Vec<CallbackWeak>,
}

/// A shared notification source for one class of layout mutation.
///
/// Cloning a `Signal` creates a new handle to the **same** source; emits
/// through either handle reach the same watchers. Handles are
/// single-threaded by construction (`Rc` interior): an emit runs every
/// watcher to completion, in registration order, before returning to the
/// event source.
pub struct Signal {
    inner: Rc<RefCell<SignalInner>>,
}

// Manual Clone: shares the same Rc.
impl Clone for Signal {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("emits", &inner.emits)
            .field("watcher_count", &inner.watchers.len())
            .finish()
    }
}

impl Signal {
    /// Create a signal with no watchers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                emits: 0,
                watchers: Vec::new(),
            })),
        }
    }

    /// Register a watcher.
    ///
    /// The callback runs on every emit, in registration order, until the
    /// returned guard is dropped.
    pub fn watch(&self, callback: impl Fn() + 'static) -> WatchGuard {
        let strong: CallbackRc = Rc::new(callback);
        let mut inner = self.inner.borrow_mut();
        inner.watchers.push(Rc::downgrade(&strong));
        debug!(watchers = inner.watchers.len(), "signal watcher attached");
        WatchGuard { _guard: strong }
    }

    /// Notify all live watchers and prune dead ones.
    pub fn emit(&self) {
        // Collect live callbacks first so the borrow is not held while
        // watcher code runs.
        let callbacks: Vec<CallbackRc> = {
            let mut inner = self.inner.borrow_mut();
            inner.emits += 1;
            inner.watchers.retain(|w| w.strong_count() > 0);
            inner.watchers.iter().filter_map(Weak::upgrade).collect()
        };

        for cb in &callbacks {
            cb();
        }
    }

    /// How many times this signal has fired.
    #[must_use]
    pub fn emit_count(&self) -> u64 {
        self.inner.borrow().emits
    }

    /// Number of registered watchers (including dead ones not yet pruned).
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.inner.borrow().watchers.len()
    }
}

/// RAII guard for a registered watcher.
///
/// Dropping the guard makes the callback unreachable; the signal prunes the
/// dead entry on its next emit.
pub struct WatchGuard {
    _guard: CallbackRc,
}

impl fmt::Debug for WatchGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchGuard").finish_non_exhaustive()
    }
}

/// The external mutation feeds a controller watches: size changes on the
/// anchor or panel, and scrolls of any ancestor.
///
/// The host owns the bundle and emits into it; controllers subscribe at
/// construction. Clones share the underlying sources.
#[derive(Debug, Clone, Default)]
pub struct LayoutSignals {
    /// Anchor or panel size changed.
    pub resize: Signal,
    /// An ancestor scrolled.
    pub scroll: Signal,
}

impl LayoutSignals {
    /// Create a fresh pair of signal sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
