// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimum seed search.
//!
//! Seed sizes are tried from `MIN_SEED_SIZE` upwards while smaller than
//! `strands - 1`; within a size, seeds are tried in lexicographic label
//! order and the first that propagates wins. If none does, the search falls
//! back to size `strands - 1` (at least 1) and returns the first seed of that
//! size that actually propagates.
//!
//! The search is a predicate program run on the backtracking engine:
//!
//! ```text
//! SeedSize -> ChooseStrand -> count(SeedsTested) -> Propagation -> Solution
//! ```
//!
//! Worst case it tests C(s, n) seeds for each size n, each test costing one
//! closure computation, so it is exponential in the number of strands.

use crate::context::SearchContext;
use crate::diagram::{StrandSet, MIN_SEED_SIZE};
use crate::engine::EngineBuilder;
use crate::error::McnError;
use crate::knot::KnotDictionary;
use crate::predicates::{
    ChooseStrandPredicate, FailPredicate, PropagationPredicate, SeedSizePredicate,
    SolutionPredicate,
};
use crate::state::{Counters, Statistics};
use std::ops::Range;

/// Result of the minimum seed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumSeed {
    size: usize,
    seed: StrandSet,
    fallback: bool,
}

impl MinimumSeed {
    pub fn new(size: usize, seed: StrandSet, fallback: bool) -> Self {
        Self {
            size,
            seed,
            fallback,
        }
    }

    /// The meridional coloring number.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The lexicographically first propagating seed of that size.
    pub fn seed(&self) -> StrandSet {
        self.seed
    }

    /// True when no seed smaller than `strands - 1` propagated.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// `(size, seed)`.
    pub fn into_parts(self) -> (usize, StrandSet) {
        (self.size, self.seed)
    }
}

/// A seed search over one knot dictionary.
///
/// Keeps its context between calls, so statistics accumulate.
///
/// # Example
///
/// ```
/// use meridional_coloring::coloring::SeedSearch;
/// use meridional_coloring::knot::build_knot_dictionary;
/// use meridional_coloring::state::Counters;
///
/// let knot = build_knot_dictionary(&[1, -4, 3, -1, 2, -3, 4, -2]).unwrap();
/// let mut search = SeedSearch::new(&knot);
/// let minimum = search.run().unwrap();
///
/// assert_eq!(minimum.size(), 2);
/// assert_eq!(minimum.seed().to_string(), "{A, B}");
/// assert_eq!(search.statistics().get(Counters::SeedsTested), 1);
/// ```
#[derive(Debug)]
pub struct SeedSearch<'k> {
    ctx: SearchContext<'k>,
}

impl<'k> SeedSearch<'k> {
    pub fn new(knot: &'k KnotDictionary) -> Self {
        Self {
            ctx: SearchContext::new(knot),
        }
    }

    /// Find the smallest propagating seed.
    ///
    /// # Errors
    ///
    /// Returns [`McnError::NoSolutionFound`] if even the fallback size has no
    /// propagating seed. That cannot happen for a diagram built from a valid
    /// Gauss code.
    pub fn run(&mut self) -> Result<MinimumSeed, McnError> {
        let strands = self.ctx.strand_count();

        let exhaustive = MIN_SEED_SIZE..strands.saturating_sub(1);
        self.ctx.fallback = false;
        if let Some(found) = self.first_propagating(exhaustive) {
            return Ok(found);
        }

        let fallback = strands.saturating_sub(1).max(1);
        self.ctx.fallback = true;
        self.ctx.statistics.increment(Counters::FallbackSearches);
        self.first_propagating(fallback..fallback + 1)
            .ok_or(McnError::NoSolutionFound { strands })
    }

    /// Count the seeds of exactly `size` strands that propagate.
    pub fn count_propagating_seeds(&mut self, size: usize) -> u64 {
        let before = self.ctx.statistics.get(Counters::PropagatingSeeds);

        let engine = EngineBuilder::new()
            .add(Box::new(SeedSizePredicate::new(size..size + 1)))
            .add(Box::new(ChooseStrandPredicate))
            .add(Statistics::counting_predicate(Counters::SeedsTested, None))
            .add(Box::new(PropagationPredicate))
            .add(Statistics::counting_predicate(Counters::PropagatingSeeds, None))
            .terminal(Box::new(FailPredicate))
            .build();
        // FailPredicate forces every seed to be visited; the engine always exhausts.
        let _ = engine.search(&mut self.ctx);

        self.ctx.statistics.get(Counters::PropagatingSeeds) - before
    }

    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    /// Run the search program over `sizes`, returning the first solution.
    fn first_propagating(&mut self, sizes: Range<usize>) -> Option<MinimumSeed> {
        self.ctx.solution = None;

        let engine = EngineBuilder::new()
            .add(Box::new(SeedSizePredicate::new(sizes)))
            .add(Box::new(ChooseStrandPredicate))
            .add(Statistics::counting_predicate(Counters::SeedsTested, None))
            .add(Box::new(PropagationPredicate))
            .terminal(Box::new(SolutionPredicate))
            .build();

        // Suspended means SolutionPredicate ran.
        engine.search(&mut self.ctx)?;
        self.ctx.solution.take()
    }
}

/// Find the meridional coloring number of a knot and a seed realising it.
///
/// # Example
///
/// ```
/// use meridional_coloring::coloring::find_minimum_coloring_seed;
/// use meridional_coloring::knot::build_knot_dictionary;
///
/// let knot = build_knot_dictionary(&[1, -2, 2, -1]).unwrap();
/// let minimum = find_minimum_coloring_seed(&knot).unwrap();
/// assert_eq!(minimum.size(), 1);
/// assert!(minimum.is_fallback());
/// ```
pub fn find_minimum_coloring_seed(knot: &KnotDictionary) -> Result<MinimumSeed, McnError> {
    SeedSearch::new(knot).run()
}
