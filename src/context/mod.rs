// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for the minimum seed search.
//!
//! The SearchContext combines:
//! - the knot dictionary being searched, borrowed and never modified
//! - the seed under construction and its target size
//! - the solution, once a propagating seed has been found
//! - statistics
//!
//! Each SearchContext is independent, so several searches over the same
//! knot dictionary may run side by side.

use crate::coloring::MinimumSeed;
use crate::diagram::StrandLabel;
use crate::knot::KnotDictionary;
use crate::state::Statistics;

/// Search context passed through every predicate.
///
/// # State restoration
///
/// Predicates restore their own part of the state when retried:
/// `SeedSizePredicate` clears `seed` and `ChooseStrandPredicate` truncates it
/// to its round before pushing the next label.
#[derive(Debug)]
pub struct SearchContext<'k> {
    /// The diagram being searched.
    pub knot: &'k KnotDictionary,
    /// Seed labels chosen so far, strictly ascending.
    pub seed: Vec<StrandLabel>,
    /// Number of labels the current seed must reach.
    pub seed_size: usize,
    /// Whether the current search is the fallback search.
    pub fallback: bool,
    /// First propagating seed found, set by `SolutionPredicate`.
    pub solution: Option<MinimumSeed>,
    pub statistics: Statistics,
}

impl<'k> SearchContext<'k> {
    /// Create a fresh context over a knot dictionary.
    pub fn new(knot: &'k KnotDictionary) -> Self {
        Self {
            knot,
            seed: Vec::with_capacity(knot.len()),
            seed_size: 0,
            fallback: false,
            solution: None,
            statistics: Statistics::new(),
        }
    }

    /// Number of strands in the diagram.
    pub fn strand_count(&self) -> usize {
        self.knot.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knot::build_knot_dictionary;

    #[test]
    fn test_new_context() {
        let knot = build_knot_dictionary(&[1, -4, 3, -1, 2, -3, 4, -2]).unwrap();
        let ctx = SearchContext::new(&knot);
        assert_eq!(ctx.strand_count(), 4);
        assert!(ctx.seed.is_empty());
        assert!(ctx.solution.is_none());
        assert!(!ctx.fallback);
    }
}
