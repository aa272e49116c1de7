// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Strand labels.
//!
//! Strands are numbered by the position at which they begin in the Gauss
//! code, and displayed as letters: `A`..`Z`, then `AA`, `AB`, ...

use crate::diagram::constants::MAX_STRANDS;
use std::fmt;

/// A strand label in the range 0..MAX_STRANDS.
///
/// This is a newtype wrapper so that strand labels are not mixed up with
/// Gauss code entries or positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrandLabel(u8);

impl StrandLabel {
    /// Create a new label, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= MAX_STRANDS`.
    pub fn new(index: usize) -> Self {
        assert!(index < MAX_STRANDS, "Strand label out of range: {}", index);
        Self(index as u8)
    }

    /// Get the label as a usize (for indexing into a `KnotDictionary`).
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StrandLabel {
    /// Bijective base-26: 0 => "A", 25 => "Z", 26 => "AA", 27 => "AB".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = Vec::new();
        let mut n = self.index() + 1;
        while n > 0 {
            n -= 1;
            letters.push(char::from(b'A' + (n % 26) as u8));
            n /= 26;
        }
        let name: String = letters.iter().rev().collect();
        f.pad(&name)
    }
}
