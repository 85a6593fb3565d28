#![forbid(unsafe_code)]

//! Optimization-scoring placement.
//!
//! Every one of the four sides is scored — not just the listed ones — and
//! the maximum wins. The raw score rewards free space and punishes overflow;
//! listed preferences outrank everything else through a rank tier compared
//! before the raw score, so a preferred side cannot be beaten by an
//! unpreferred one no matter how the numbers fall.

use std::cmp::Ordering;

use floatkit_core::{Rect, Side, Size, Viewport, space_available};
use rustc_hash::FxHashMap;

use crate::required_space;

/// Score breakdown for one candidate side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideScore {
    pub side: Side,
    /// Space between the anchor's edge and the viewport edge on this side.
    pub space: f64,
    /// Footprint extent exceeding the space, floored at zero.
    pub overflow: f64,
    /// Configured additive bias for this side.
    pub bias: f64,
    /// Position in the preference sequence, if listed.
    pub preference_rank: Option<usize>,
    /// Composite raw score: `space - overflow + bias`.
    pub score: f64,
}

impl SideScore {
    /// Preference tier. Listed sides strictly outrank unlisted ones, and an
    /// earlier listing outranks a later one, regardless of raw score.
    fn tier(&self, preference_len: usize) -> usize {
        match self.preference_rank {
            Some(rank) => preference_len - rank,
            None => 0,
        }
    }
}

/// Score all four sides for the given geometry.
#[must_use]
pub fn score_sides(
    preference: &[Side],
    bias: &FxHashMap<Side, f64>,
    anchor: Rect,
    viewport: Viewport,
    footprint: Size,
) -> [SideScore; 4] {
    Side::ALL.map(|side| {
        let space = space_available(anchor, viewport, side);
        let overflow = (required_space(footprint, side) - space).max(0.0);
        let bias = bias.get(&side).copied().unwrap_or(0.0);
        SideScore {
            side,
            space,
            overflow,
            bias,
            preference_rank: preference.iter().position(|&p| p == side),
            score: space - overflow + bias,
        }
    })
}

/// Choose the highest-scoring side.
///
/// A single configured side is expressed as a length-1 preference sequence.
/// Ties keep the first maximum in [`Side::ALL`] order.
///
/// Always returns a side.
#[must_use]
pub fn scored(
    preference: &[Side],
    bias: &FxHashMap<Side, f64>,
    anchor: Rect,
    viewport: Viewport,
    footprint: Size,
) -> Side {
    let scores = score_sides(preference, bias, anchor, viewport, footprint);

    let mut best = &scores[0];
    for candidate in &scores[1..] {
        let outranks = match candidate
            .tier(preference.len())
            .cmp(&best.tier(preference.len()))
        {
            Ordering::Greater => true,
            Ordering::Equal => candidate.score.total_cmp(&best.score) == Ordering::Greater,
            Ordering::Less => false,
        };
        if outranks {
            best = candidate;
        }
    }
    best.side
}
