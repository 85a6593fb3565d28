#![forbid(unsafe_code)]

//! floatkit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use floatkit::prelude::*;
//! use floatkit::fixture::{RecordingSurface, SharedGeometry};
//!
//! let geometry = SharedGeometry::new(
//!     Rect::new(100.0, 500.0, 50.0, 20.0),
//!     Viewport::new(800.0, 600.0),
//!     Size::new(120.0, 40.0),
//! );
//! let signals = LayoutSignals::new();
//! let config = PopoverConfig::new()
//!     .placement(Side::Bottom)
//!     .fallbacks([Side::Top, Side::Right, Side::Left]);
//!
//! let popover = Popover::new(config, geometry.clone(), RecordingSurface::new(), &signals);
//! popover.show();
//! assert_eq!(popover.active_placement(), Some(Side::Bottom));
//!
//! // A panel too tall for the space below flips above on the next signal.
//! geometry.set_footprint(Size::new(120.0, 150.0));
//! signals.resize.emit();
//! assert_eq!(popover.active_placement(), Some(Side::Top));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use floatkit_core::{
    Gap, GeometrySource, PanelSurface, Rect, Side, Size, Viewport, space_available,
};

// --- Placement re-exports --------------------------------------------------

pub use floatkit_placement::{
    PlacementStrategy, PopoverConfig, SideScore, first_fit, required_space, score_sides, scored,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use floatkit_runtime::{LayoutSignals, Phase, Popover, Signal, WatchGuard};

#[cfg(feature = "runtime")]
pub use floatkit_runtime::fixture;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use floatkit_core::{Gap, GeometrySource, PanelSurface, Rect, Side, Size, Viewport};
    pub use floatkit_placement::{PlacementStrategy, PopoverConfig};
    #[cfg(feature = "runtime")]
    pub use floatkit_runtime::{LayoutSignals, Phase, Popover};
}
