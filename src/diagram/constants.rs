// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time limits for knot diagrams.

/// Maximum number of strands (equivalently crossings) in a diagram.
///
/// A `StrandSet` is a single `u64` bitset, so labels must lie in `0..64`.
/// The seed search is exponential in the number of strands, so diagrams
/// anywhere near this size are out of reach anyway.
pub const MAX_STRANDS: usize = 64;

/// Smallest seed size the search tries before any fallback.
///
/// A single colored strand can never propagate: every crossing it is over
/// needs one of its two under strands colored already.
pub const MIN_SEED_SIZE: usize = 2;

/// Separator that may be embedded in textual Gauss code tokens (`"1,"`, `"-4,"`).
pub const SEPARATOR: char = ',';
