#![forbid(unsafe_code)]

//! Popover configuration.
//!
//! A [`PopoverConfig`] is validated and defaulted once, at construction, and
//! never mutated afterwards. The two selection policies correspond to two
//! historical configuration shapes — an ordered fallback list versus an
//! array-valued preference with per-side bias — and are kept as two named
//! [`PlacementStrategy`] variants rather than merged into one ambiguous
//! option.

use floatkit_core::{Gap, Rect, Side, Size, Viewport};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::first_fit::first_fit;
use crate::scored::scored;

/// How the active side is chosen when space is tight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// Take the first candidate whose available space fits the footprint.
    FirstFit {
        /// Sides tried, in order, after the preferred side fails to fit.
        fallbacks: Vec<Side>,
    },
    /// Score all four sides and take the maximum.
    Scored {
        /// Ordered preference. Earlier entries outrank later ones, and any
        /// listed side outranks an unlisted one. Empty means "use the
        /// configured placement as a length-1 preference".
        preference: Vec<Side>,
        /// Additive per-side score adjustment.
        bias: FxHashMap<Side, f64>,
    },
}

impl Default for PlacementStrategy {
    fn default() -> Self {
        Self::FirstFit {
            fallbacks: Vec::new(),
        }
    }
}

/// Immutable popover configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PopoverConfig {
    /// Preferred side. Defaults to [`Side::Bottom`].
    pub placement: Side,
    /// Gap between the anchor's edge and the panel, written to the surface
    /// alongside the chosen side. Never affects which side wins.
    pub gap: Gap,
    /// Selection policy.
    pub strategy: PlacementStrategy,
}

impl PopoverConfig {
    /// A config with the default placement (bottom), no gap, and first-fit
    /// selection with no fallbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred side.
    #[must_use]
    pub fn placement(mut self, side: Side) -> Self {
        self.placement = side;
        self
    }

    /// Set a uniform pixel gap between anchor and panel.
    #[must_use]
    pub fn gap(mut self, px: f64) -> Self {
        self.gap = Gap::uniform(px);
        self
    }

    /// Set independent horizontal and vertical gaps.
    #[must_use]
    pub fn gap_xy(mut self, x: f64, y: f64) -> Self {
        self.gap = Gap::xy(x, y);
        self
    }

    /// Use first-fit selection with the given fallback order.
    ///
    /// Replaces any previously configured strategy.
    #[must_use]
    pub fn fallbacks(mut self, sides: impl IntoIterator<Item = Side>) -> Self {
        self.strategy = PlacementStrategy::FirstFit {
            fallbacks: sides.into_iter().collect(),
        };
        self
    }

    /// Use scoring selection with the given preference order.
    ///
    /// Keeps any bias already configured; otherwise replaces the strategy.
    #[must_use]
    pub fn preference(mut self, sides: impl IntoIterator<Item = Side>) -> Self {
        let bias = match self.strategy {
            PlacementStrategy::Scored { bias, .. } => bias,
            PlacementStrategy::FirstFit { .. } => FxHashMap::default(),
        };
        self.strategy = PlacementStrategy::Scored {
            preference: sides.into_iter().collect(),
            bias,
        };
        self
    }

    /// Add a per-side score bias, switching to scoring selection if the
    /// config was still first-fit.
    #[must_use]
    pub fn bias(mut self, side: Side, amount: f64) -> Self {
        let (preference, mut bias) = match self.strategy {
            PlacementStrategy::Scored { preference, bias } => (preference, bias),
            PlacementStrategy::FirstFit { .. } => (Vec::new(), FxHashMap::default()),
        };
        bias.insert(side, amount);
        self.strategy = PlacementStrategy::Scored { preference, bias };
        self
    }

    /// Resolve the active side for the given geometry.
    ///
    /// Dispatches to the configured policy. Total: always returns exactly
    /// one side.
    #[must_use]
    pub fn select(&self, anchor: Rect, viewport: Viewport, footprint: Size) -> Side {
        match &self.strategy {
            PlacementStrategy::FirstFit { fallbacks } => {
                first_fit(self.placement, fallbacks, anchor, viewport, footprint)
            }
            PlacementStrategy::Scored { preference, bias } => {
                if preference.is_empty() {
                    scored(&[self.placement], bias, anchor, viewport, footprint)
                } else {
                    scored(preference, bias, anchor, viewport, footprint)
                }
            }
        }
    }
}
