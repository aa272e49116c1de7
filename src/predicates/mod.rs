// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the seed search.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `seed`: predicates that choose a seed set and test it
//! - Built-in predicates: `FailPredicate`

pub mod seed;

// Re-export main predicates for convenience
pub use seed::{ChooseStrandPredicate, PropagationPredicate, SeedSizePredicate, SolutionPredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it makes the engine explore every alternative, which is how predicates
/// that only count (see `Statistics::counting_predicate`) see the whole
/// search space.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}
