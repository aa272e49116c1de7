// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Strand extraction.
//!
//! A strand is the arc of the diagram between two consecutive
//! under-crossings. In the Gauss code it is the cyclic slice that starts at a
//! negative entry and runs forward to the next negative entry, both included.
//! Neighbouring strands therefore share the under-crossing between them.
//!
//! Strands are labelled in the order of their starting position, so the same
//! Gauss code always yields the same labels.

use crate::diagram::StrandLabel;
use crate::gauss::GaussCode;

/// A strand before its crossings have been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strand {
    pub label: StrandLabel,
    /// Position of the first (negative) entry in the Gauss code.
    pub start: usize,
    /// The entries of the strand, first and last are negative.
    pub subsequence: Vec<i32>,
}

/// Partition a Gauss code into strands, one per under-crossing.
///
/// With a single crossing the strand runs all the way around and ends on the
/// entry it started from.
pub fn extract_strands(code: &GaussCode) -> Vec<Strand> {
    let entries = code.entries();
    let len = entries.len();

    code.under_positions()
        .enumerate()
        .map(|(ordinal, start)| {
            let mut end = (start + 1) % len;
            while entries[end] > 0 {
                end = (end + 1) % len;
            }

            let subsequence = if end > start {
                entries[start..=end].to_vec()
            } else {
                let mut wrapped = entries[start..].to_vec();
                wrapped.extend_from_slice(&entries[..=end]);
                wrapped
            };

            Strand {
                label: StrandLabel::new(ordinal),
                start,
                subsequence,
            }
        })
        .collect()
}
