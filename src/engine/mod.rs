// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A call-mode entry is tried once. Backtracking into an entry that already
//! succeeded (or suspended) pops it, so the search moves on to the previous
//! choice point.
//!
//! Choices are explored depth first and in ascending order, so a program
//! that picks labels in ascending order enumerates subsets lexicographically.

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const STACK_CAPACITY: usize = 128;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Whether try_pred has already run for this entry.
    tried: bool,
}

impl StackEntry {
    fn call(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            tried: false,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search to find the next solution.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Calling `search` again on a suspended engine resumes it: the search
    /// backtracks from the suspending predicate into the next alternative.
    /// Statistics accumulate across resumptions.
    ///
    /// Success is indicated via side effects (state in `ctx`), not by the
    /// return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without
    /// failing or suspending), or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext<'_>) -> Option<Self> {
        if self.stack.is_empty() {
            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }
            self.stack.push(StackEntry::call(0, 0));
        }

        // Main execution loop
        loop {
            // Backtracked past the first predicate: search exhausted
            let entry = self.stack.last_mut()?;

            if !entry.in_choice_mode {
                // Backtracked into an entry that already succeeded
                if entry.tried {
                    self.stack.pop();
                    continue;
                }

                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);
                entry.tried = true;

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                        }
                    }
                    PredicateResult::Suspend => {
                        return Some(self);
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence.
    fn push_next_predicate(&mut self) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without failing or suspending. \
                 Every program must end with a terminal predicate."
            );
        }

        self.stack.push(StackEntry::call(next_index, 0));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack.push(StackEntry::call(pred_index, next_round));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for search programs that always end with a terminal predicate.
///
/// # Example
///
/// ```
/// use meridional_coloring::context::SearchContext;
/// use meridional_coloring::engine::EngineBuilder;
/// use meridional_coloring::knot::build_knot_dictionary;
/// use meridional_coloring::predicates::{FailPredicate, SeedSizePredicate};
///
/// let knot = build_knot_dictionary(&[1, -2, 2, -1]).unwrap();
/// let mut ctx = SearchContext::new(&knot);
/// let engine = EngineBuilder::new()
///     .add(Box::new(SeedSizePredicate::new(1..3)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Every size is tried, then the program fails
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.seed_size, 2);
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(
        mut self,
        predicate: Box<T>,
    ) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete program, ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
