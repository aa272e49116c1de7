// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! The seed under construction lives directly on the `SearchContext`; this
//! module holds the per-search counters.

pub mod statistics;

pub use statistics::{Counters, Statistics};
