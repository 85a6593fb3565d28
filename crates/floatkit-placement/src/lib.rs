#![forbid(unsafe_code)]

//! Placement selection policies over floatkit geometry.
//!
//! # Role in floatkit
//! Given an anchor rectangle, the viewport, and the panel's footprint, this
//! crate decides which [`Side`] the panel goes on. Two policies exist, both
//! total functions — for any finite geometry they terminate and return
//! exactly one side:
//!
//! - [`first_fit`]: take the preferred side if it fits, otherwise the first
//!   fallback that fits, otherwise the candidate with the most space.
//! - [`scored`]: score all four sides (`space - overflow + bias`, preferred
//!   sides outranking the rest) and take the maximum.
//!
//! Neither policy touches presentation state; the reactive wiring lives in
//! `floatkit-runtime`.

pub mod config;
pub mod first_fit;
pub mod scored;

pub use config::{PlacementStrategy, PopoverConfig};
pub use first_fit::first_fit;
pub use scored::{SideScore, score_sides, scored};

use floatkit_core::{Side, Size};

/// The footprint dimension a side must accommodate: height for vertical
/// placements, width for horizontal ones.
#[must_use]
pub fn required_space(footprint: Size, side: Side) -> f64 {
    if side.is_vertical() {
        footprint.height
    } else {
        footprint.width
    }
}
