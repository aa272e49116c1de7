// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Basic types for knot diagrams.
//!
//! - StrandLabel: canonical name of a strand (0..MAX_STRANDS-1)
//! - StrandSet: bitset of strand labels, used for seed and colored sets
//! - constants: compile-time limits

pub mod constants;
pub mod label;
pub mod strand_set;

// Re-export for convenience
pub use constants::*;
pub use label::StrandLabel;
pub use strand_set::StrandSet;
