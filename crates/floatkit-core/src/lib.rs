#![forbid(unsafe_code)]

//! Geometry primitives and host capability traits for floatkit.
//!
//! # Role in floatkit
//! `floatkit-core` is the foundation layer: the value types every other crate
//! speaks (`Rect`, `Size`, `Viewport`, `Gap`, `Side`), the pure space sampler,
//! and the traits a host application implements to supply live geometry and a
//! presentation surface. It has no opinion about how sides are chosen — that
//! lives in `floatkit-placement` — and no reactive machinery, which lives in
//! `floatkit-runtime`.

pub mod geometry;
pub mod host;

pub use geometry::{Gap, Rect, Side, Size, Viewport, space_available};
pub use host::{GeometrySource, PanelSurface};
