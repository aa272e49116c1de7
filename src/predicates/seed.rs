// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that build and test seed sets.
//!
//! The minimum seed search is the program
//!
//! ```text
//! SeedSizePredicate -> ChooseStrandPredicate -> (counting) -> PropagationPredicate -> SolutionPredicate
//! ```
//!
//! Sizes are tried in ascending order, and for each size the labels are
//! chosen in ascending order, so the first seed to reach `SolutionPredicate`
//! is the lexicographically first propagating seed of the smallest size.

use crate::coloring::{propagates, MinimumSeed};
use crate::context::SearchContext;
use crate::diagram::{StrandLabel, StrandSet};
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};
use crate::state::Counters;
use std::ops::Range;

/// Chooses the seed size, trying each size of a range in ascending order.
#[derive(Debug)]
pub struct SeedSizePredicate {
    sizes: Range<usize>,
}

impl SeedSizePredicate {
    pub fn new(sizes: Range<usize>) -> Self {
        Self { sizes }
    }
}

impl Predicate for SeedSizePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        if self.sizes.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(self.sizes.len())
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<'_>,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let size = self.sizes.start + choice;
        if size >= self.sizes.end || size > ctx.strand_count() {
            return PredicateResult::Failure;
        }
        ctx.seed.clear();
        ctx.seed_size = size;
        ctx.statistics.increment(Counters::SeedSizes);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "SeedSize"
    }
}

/// Chooses one seed label per round, strictly above the previous one.
///
/// Round `r` fills position `r` of the seed. Labels are limited so that
/// enough larger labels remain for the positions still to fill.
#[derive(Debug)]
pub struct ChooseStrandPredicate;

impl ChooseStrandPredicate {
    /// Inclusive range of label indices available at position `round`.
    fn candidates(ctx: &SearchContext<'_>, round: usize) -> (usize, usize) {
        let low = match round {
            0 => 0,
            _ => ctx.seed[round - 1].index() + 1,
        };
        let remaining = ctx.seed_size - round;
        let high = ctx.strand_count() - remaining;
        (low, high)
    }
}

impl Predicate for ChooseStrandPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, round: usize) -> PredicateResult {
        if round == ctx.seed_size {
            return PredicateResult::Success;
        }
        let (low, high) = Self::candidates(ctx, round);
        if low > high {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(high - low + 1)
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        ctx.seed.truncate(round);
        let (low, high) = Self::candidates(ctx, round);
        let index = low + choice;
        if index > high {
            return PredicateResult::Failure;
        }
        ctx.seed.push(StrandLabel::new(index));
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ChooseStrand"
    }
}

/// Succeeds when the chosen seed colors every strand.
#[derive(Debug)]
pub struct PropagationPredicate;

impl Predicate for PropagationPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        let seed = StrandSet::from_labels(&ctx.seed);
        if propagates(seed, ctx.knot) {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Propagation"
    }
}

/// Records the current seed as the solution and suspends the search.
#[derive(Debug)]
pub struct SolutionPredicate;

impl Predicate for SolutionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        let seed = StrandSet::from_labels(&ctx.seed);
        ctx.solution = Some(MinimumSeed::new(ctx.seed_size, seed, ctx.fallback));
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Solution"
    }
}

impl TerminalPredicate for SolutionPredicate {}
