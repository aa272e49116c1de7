// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gauss codes.
//!
//! A Gauss code lists the crossings met while travelling once around a knot
//! diagram. Crossing `v` is written `v` where the knot passes over it and
//! `-v` where it passes under. The sequence is cyclic: the last entry is
//! followed by the first.
//!
//! [`GaussCode`] is the validated form. Everything downstream (strand
//! extraction, crossing resolution, the coloring search) relies on each
//! magnitude occurring exactly once with each sign, so that is checked here,
//! before any strand is built.

pub mod normalize;

pub use normalize::{normalize, GaussToken};

use crate::diagram::constants::MAX_STRANDS;
use crate::error::{Malformation, McnError};
use std::collections::BTreeMap;

/// A validated Gauss code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaussCode {
    entries: Vec<i32>,
}

impl GaussCode {
    /// Validate a sequence of signed entries.
    ///
    /// # Errors
    ///
    /// - [`Malformation::Empty`] for an empty sequence
    /// - [`Malformation::ZeroEntry`] if any entry is 0
    /// - [`Malformation::Unpaired`] for the smallest magnitude that does not
    ///   occur exactly once positive and once negative
    /// - [`McnError::TooManyStrands`] for more than `MAX_STRANDS` crossings
    pub fn new(entries: Vec<i32>) -> Result<Self, McnError> {
        if entries.is_empty() {
            return Err(Malformation::Empty.into());
        }

        // magnitude -> (over count, under count)
        let mut occurrences: BTreeMap<u32, (usize, usize)> = BTreeMap::new();
        for (position, &entry) in entries.iter().enumerate() {
            if entry == 0 {
                return Err(Malformation::ZeroEntry { position }.into());
            }
            let counts = occurrences.entry(entry.unsigned_abs()).or_default();
            if entry > 0 {
                counts.0 += 1;
            } else {
                counts.1 += 1;
            }
        }

        if let Some((&magnitude, &(positive, negative))) = occurrences
            .iter()
            .find(|(_, &(positive, negative))| positive != 1 || negative != 1)
        {
            return Err(Malformation::Unpaired {
                magnitude,
                positive,
                negative,
            }
            .into());
        }

        if occurrences.len() > MAX_STRANDS {
            return Err(McnError::TooManyStrands {
                strands: occurrences.len(),
                max: MAX_STRANDS,
            });
        }

        Ok(Self { entries })
    }

    /// Parse and validate textual (or integer) tokens in one step.
    pub fn parse<T, I>(tokens: I) -> Result<Self, McnError>
    where
        T: GaussToken,
        I: IntoIterator<Item = T>,
    {
        Self::new(normalize(tokens)?)
    }

    /// The signed entries, in order.
    pub fn entries(&self) -> &[i32] {
        &self.entries
    }

    /// Number of entries (twice the number of crossings).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: empty codes are rejected by [`GaussCode::new`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of crossings in the diagram.
    pub fn crossing_count(&self) -> usize {
        self.entries.len() / 2
    }

    /// Positions of the under-crossing (negative) entries, ascending.
    pub fn under_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, &entry)| entry < 0)
            .map(|(position, _)| position)
    }
}
