// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! StrandSet type for representing sets of strands as bitsets.
//!
//! Seed sets and colored sets are both StrandSets: bit i is set when the
//! strand labelled i is in the set.
//!
//! # Examples
//!
//! ```
//! use meridional_coloring::diagram::{StrandLabel, StrandSet};
//!
//! let mut set = StrandSet::empty();
//! set.insert(StrandLabel::new(0));
//! set.insert(StrandLabel::new(2));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "{A, C}");
//!
//! let labels: Vec<String> = set.iter().map(|l| l.to_string()).collect();
//! assert_eq!(labels, vec!["A", "C"]);
//! ```

use crate::diagram::{constants::MAX_STRANDS, StrandLabel};
use std::fmt;

/// A set of strand labels represented as a bitset.
///
/// Bit i (counting from LSB) is set if strand i is in the set.
/// This provides O(1) insert, contains and subset tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StrandSet(u64);

impl StrandSet {
    /// Create an empty strand set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create the set of the first `count` strands (labels 0..count).
    ///
    /// # Panics
    ///
    /// Panics if `count > MAX_STRANDS`.
    pub fn full(count: usize) -> Self {
        assert!(count <= MAX_STRANDS, "Too many strands: {}", count);
        if count == MAX_STRANDS {
            Self(u64::MAX)
        } else {
            Self((1u64 << count) - 1)
        }
    }

    /// Create a strand set from a slice of labels.
    pub fn from_labels(labels: &[StrandLabel]) -> Self {
        let mut set = Self::empty();
        for &label in labels {
            set.insert(label);
        }
        set
    }

    /// Check if the set contains a specific strand.
    pub fn contains(self, label: StrandLabel) -> bool {
        (self.0 >> label.index()) & 1 != 0
    }

    /// Insert a strand into the set.
    pub fn insert(&mut self, label: StrandLabel) {
        self.0 |= 1u64 << label.index();
    }

    /// Get the number of strands in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The strands in both `self` and `other`.
    pub fn intersection(self, other: StrandSet) -> StrandSet {
        Self(self.0 & other.0)
    }

    /// Check whether every strand of `self` is also in `other`.
    pub fn is_subset(self, other: StrandSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Iterate over all strands in the set, in ascending label order.
    pub fn iter(self) -> impl Iterator<Item = StrandLabel> {
        StrandSetIter { bits: self.0 }
    }
}

/// Iterator over strands in a StrandSet.
struct StrandSetIter {
    bits: u64,
}

impl Iterator for StrandSetIter {
    type Item = StrandLabel;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(StrandLabel::new(index))
    }
}

impl fmt::Display for StrandSet {
    /// Format a strand set as "{A, B, D}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, label) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", label)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<StrandLabel> for StrandSet {
    fn from_iter<I: IntoIterator<Item = StrandLabel>>(iter: I) -> Self {
        let mut set = Self::empty();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(i: usize) -> StrandLabel {
        StrandLabel::new(i)
    }

    #[test]
    fn test_empty() {
        let set = StrandSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.bits(), 0);
    }

    #[test]
    fn test_full() {
        let set = StrandSet::full(5);
        assert_eq!(set.len(), 5);
        for i in 0..5 {
            assert!(set.contains(label(i)));
        }
        assert!(!set.contains(label(5)));

        assert_eq!(StrandSet::full(0), StrandSet::empty());
        assert_eq!(StrandSet::full(MAX_STRANDS).len(), MAX_STRANDS);
    }

    #[test]
    fn test_insert() {
        let mut set = StrandSet::empty();
        set.insert(label(0));
        set.insert(label(63));
        assert!(set.contains(label(0)));
        assert!(set.contains(label(63)));
        assert_eq!(set.len(), 2);
        set.insert(label(0)); // Insert again - should be idempotent
        assert_eq!(set.len(), 2);
        assert!(!set.contains(label(1)));
    }

    #[test]
    fn test_subset() {
        let small = StrandSet::from_labels(&[label(1), label(3)]);
        let big = StrandSet::from_labels(&[label(0), label(1), label(3)]);
        assert!(small.is_subset(big));
        assert!(!big.is_subset(small));
        assert!(StrandSet::empty().is_subset(small));
        assert_eq!(big.intersection(StrandSet::full(2)).bits(), 0b11);
    }

    #[test]
    fn test_iter_ascending() {
        let set: StrandSet = [label(7), label(2), label(40)].into_iter().collect();
        let labels: Vec<_> = set.iter().map(|l| l.index()).collect();
        assert_eq!(labels, vec![2, 7, 40]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", StrandSet::empty()), "{}");
        assert_eq!(format!("{}", StrandSet::full(3)), "{A, B, C}");
    }

    #[test]
    fn test_from_labels() {
        let set = StrandSet::from_labels(&[label(0), label(2), label(0)]);
        assert_eq!(set.bits(), 0b101);
    }
}
