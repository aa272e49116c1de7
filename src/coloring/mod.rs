// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coloring propagation and the minimum seed search.
//!
//! # Propagation rule
//!
//! If strand X is colored and X passes over a crossing whose two under
//! strands `(u1, u2)` have exactly one colored, the other becomes colored
//! too. This mirrors the Wirtinger relation at the crossing: the over strand
//! together with one side determines the other side. The closure is reached
//! when a full pass adds nothing; since strands are only ever added, at most
//! one pass per strand is needed.
//!
//! A seed *propagates* when its closure is every strand of the diagram. The
//! meridional coloring number is the size of the smallest seed that
//! propagates (see [`search`]).

pub mod search;

pub use search::{find_minimum_coloring_seed, MinimumSeed, SeedSearch};

use crate::diagram::StrandSet;
use crate::knot::KnotDictionary;

/// Compute the set of strands colored once propagation from `seed` settles.
///
/// Labels in `seed` that are not strands of `knot` are ignored.
pub fn closure(seed: StrandSet, knot: &KnotDictionary) -> StrandSet {
    let mut colored = seed.intersection(knot.all_strands());
    let mut changed = true;

    while changed {
        changed = false;
        for strand in colored.iter() {
            for crossing in knot[strand].crossings_over() {
                let (beginning, ending) = crossing.pair();
                if colored.contains(beginning) != colored.contains(ending) {
                    colored.insert(beginning);
                    colored.insert(ending);
                    changed = true;
                }
            }
        }
    }

    colored
}

/// Check whether coloring `seed` eventually colors every strand.
///
/// # Example
///
/// ```
/// use meridional_coloring::coloring::propagates;
/// use meridional_coloring::diagram::{StrandLabel, StrandSet};
/// use meridional_coloring::knot::build_knot_dictionary;
///
/// let knot = build_knot_dictionary(&[1, -4, 3, -1, 2, -3, 4, -2]).unwrap();
/// let a_b = StrandSet::from_labels(&[StrandLabel::new(0), StrandLabel::new(1)]);
/// assert!(propagates(a_b, &knot));
/// assert!(!propagates(StrandSet::from_labels(&[StrandLabel::new(0)]), &knot));
/// ```
pub fn propagates(seed: StrandSet, knot: &KnotDictionary) -> bool {
    knot.all_strands().is_subset(closure(seed, knot))
}
