#![forbid(unsafe_code)]

//! Reactive runtime for floatkit popovers.
//!
//! # Key Components
//!
//! - [`Signal`] - Value-less notification source for layout mutations
//! - [`WatchGuard`] - RAII handle; drop to unregister a watcher
//! - [`LayoutSignals`] - The resize + scroll feeds a controller watches
//! - [`Popover`] - Controller owning a live panel and its placement
//! - [`fixture`] - Test doubles for hosts without a real layout engine
//!
//! # Role in floatkit
//! `floatkit-runtime` is the orchestrator: it listens to the host's layout
//! signals, re-runs the `floatkit-placement` selector against fresh
//! `floatkit-core` geometry, and writes the winning side into the panel's
//! presentation state. Everything is single-threaded and synchronous — each
//! trigger runs the whole pipeline to completion before control returns.

pub mod controller;
pub mod fixture;
pub mod signal;

pub use controller::{Phase, Popover};
pub use signal::{LayoutSignals, Signal, WatchGuard};
