// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knot dictionaries.
//!
//! A [`KnotDictionary`] records, for every strand of a diagram, the part of
//! the Gauss code it covers and the pairs of strands it passes over. It is
//! built once per Gauss code and only read afterwards; the coloring search
//! borrows it.
//!
//! # Example
//!
//! ```
//! use meridional_coloring::knot::build_knot_dictionary;
//!
//! let knot = build_knot_dictionary(&[1, -4, 3, -1, 2, -3, 4, -2]).unwrap();
//! assert_eq!(knot.len(), 4);
//!
//! let a = knot.iter().next().unwrap();
//! assert_eq!(a.label().to_string(), "A");
//! assert_eq!(a.subsequence(), &[-4, 3, -1]);
//! let (u1, u2) = a.crossings_over()[0].pair();
//! assert_eq!((u1.to_string(), u2.to_string()), ("C".to_string(), "B".to_string()));
//! ```

pub mod crossings;
pub mod strands;

use crate::diagram::{StrandLabel, StrandSet};
use crate::error::McnError;
use crate::gauss::GaussCode;

/// One crossing that a strand passes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverCrossing {
    pub(crate) magnitude: u32,
    /// The strand beginning at the under-crossing `-magnitude`.
    pub(crate) beginning: StrandLabel,
    /// The strand ending at the under-crossing `-magnitude`.
    pub(crate) ending: StrandLabel,
}

impl OverCrossing {
    /// The crossing number, as written in the Gauss code.
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    pub fn beginning(&self) -> StrandLabel {
        self.beginning
    }

    pub fn ending(&self) -> StrandLabel {
        self.ending
    }

    /// The two strands underneath, as `(beginning, ending)`.
    pub fn pair(&self) -> (StrandLabel, StrandLabel) {
        (self.beginning, self.ending)
    }
}

/// A strand together with the crossings it passes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandRecord {
    pub(crate) label: StrandLabel,
    pub(crate) start: usize,
    pub(crate) subsequence: Vec<i32>,
    pub(crate) crossings_over: Vec<OverCrossing>,
}

impl StrandRecord {
    pub fn label(&self) -> StrandLabel {
        self.label
    }

    /// Position in the Gauss code where the strand begins.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The Gauss code entries covered by the strand, both under-crossings included.
    pub fn subsequence(&self) -> &[i32] {
        &self.subsequence
    }

    /// One entry per positive entry of the subsequence, in the same order.
    pub fn crossings_over(&self) -> &[OverCrossing] {
        &self.crossings_over
    }
}

/// The resolved strands of a knot diagram, indexed by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnotDictionary {
    records: Vec<StrandRecord>,
}

impl KnotDictionary {
    /// Extract the strands of a validated Gauss code and resolve their crossings.
    pub fn build(code: &GaussCode) -> Self {
        let records = crossings::resolve_crossings(strands::extract_strands(code));
        Self { records }
    }

    /// Number of strands (equal to the number of crossings).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a strand by label.
    pub fn get(&self, label: StrandLabel) -> Option<&StrandRecord> {
        self.records.get(label.index())
    }

    /// Iterate over the strands in label order.
    pub fn iter(&self) -> impl Iterator<Item = &StrandRecord> {
        self.records.iter()
    }

    /// All labels, in canonical order.
    pub fn labels(&self) -> impl Iterator<Item = StrandLabel> + '_ {
        self.records.iter().map(|record| record.label)
    }

    /// The set of every strand in the diagram.
    pub fn all_strands(&self) -> StrandSet {
        StrandSet::full(self.records.len())
    }

    /// Total number of over-crossing entries over all strands.
    pub fn crossing_count(&self) -> usize {
        self.records.iter().map(|r| r.crossings_over.len()).sum()
    }
}

impl std::ops::Index<StrandLabel> for KnotDictionary {
    type Output = StrandRecord;

    fn index(&self, label: StrandLabel) -> &Self::Output {
        &self.records[label.index()]
    }
}

impl<'a> IntoIterator for &'a KnotDictionary {
    type Item = &'a StrandRecord;
    type IntoIter = std::slice::Iter<'a, StrandRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Validate signed Gauss code entries and build their knot dictionary.
///
/// # Errors
///
/// Returns [`McnError::MalformedGaussCode`] or [`McnError::TooManyStrands`]
/// before any strand is extracted.
pub fn build_knot_dictionary(entries: &[i32]) -> Result<KnotDictionary, McnError> {
    let code = GaussCode::new(entries.to_vec())?;
    Ok(KnotDictionary::build(&code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Malformation;

    #[test]
    fn test_build_four_crossings() {
        let knot = build_knot_dictionary(&[1, -4, 3, -1, 2, -3, 4, -2]).unwrap();
        assert_eq!(knot.len(), 4);
        assert_eq!(knot.crossing_count(), 4);
        assert_eq!(knot.all_strands(), StrandSet::full(4));

        let c = &knot[StrandLabel::new(2)];
        assert_eq!(c.start(), 5);
        assert_eq!(c.subsequence(), &[-3, 4, -2]);
        assert_eq!(
            c.crossings_over()[0].pair(),
            (StrandLabel::new(0), StrandLabel::new(3))
        );
    }

    #[test]
    fn test_labels_are_keys_exactly_once() {
        let knot = build_knot_dictionary(&[-1, 3, -2, 1, -3, 2]).unwrap();
        let labels: Vec<_> = knot.labels().map(|l| l.index()).collect();
        assert_eq!(labels, vec![0, 1, 2]);
        for label in knot.labels() {
            assert_eq!(knot.get(label).map(|r| r.label()), Some(label));
        }
        assert!(knot.get(StrandLabel::new(3)).is_none());
    }

    #[test]
    fn test_malformed_rejected_before_extraction() {
        assert_eq!(
            build_knot_dictionary(&[1, -1, 1, -2, 2]),
            Err(McnError::MalformedGaussCode(Malformation::Unpaired {
                magnitude: 1,
                positive: 2,
                negative: 1
            }))
        );
    }
}
