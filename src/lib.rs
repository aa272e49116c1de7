// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Meridional coloring number of knot diagrams.
//!
//! Given a knot diagram as a Gauss code, find the smallest set of seed
//! strands whose coloring, propagated across the crossings, colors every
//! strand of the diagram. The size of that set is the *meridional coloring
//! number* (MCN) of the diagram.
//!
//! # Pipeline
//!
//! 1. **Normalization** ([`gauss::normalize`]): raw tokens, possibly with
//!    embedded commas, become signed integers.
//! 2. **Validation** ([`gauss::GaussCode`]): every crossing must occur once
//!    over and once under.
//! 3. **Strands** ([`knot::strands`]): the code is cut at each under-crossing;
//!    strands are labelled `A`, `B`, ... by starting position.
//! 4. **Crossings** ([`knot::crossings`]): each over-crossing of a strand is
//!    resolved to the pair of strands beneath it, giving the
//!    [`KnotDictionary`].
//! 5. **Search** ([`coloring`]): seeds of increasing size are tried in
//!    lexicographic order until one propagates.
//!
//! # Search Algorithm
//!
//! The search runs on a small backtracking engine ([`engine`]): a program is
//! a sequence of [`Predicate`]s, each of which may offer choices, and the
//! engine explores them depth first. The seed search program picks a size,
//! then one label per seed position, then tests propagation, and suspends on
//! the first seed that colors everything.
//!
//! # Example
//!
//! ```
//! use meridional_coloring::meridional_coloring_number;
//!
//! let tokens = ["1,", "-4,", "3,", "-1,", "2,", "-3,", "4,", "-2"];
//! let minimum = meridional_coloring_number(tokens).unwrap();
//! assert_eq!(minimum.size(), 2);
//! assert_eq!(minimum.seed().to_string(), "{A, B}");
//! ```

pub mod coloring;
pub mod context;
pub mod diagram;
pub mod engine;
pub mod error;
pub mod gauss;
pub mod knot;
pub mod predicates;
pub mod render;
pub mod state;

// Re-export commonly used types
pub use coloring::{find_minimum_coloring_seed, propagates, MinimumSeed};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::McnError;
pub use gauss::{normalize, GaussCode};
pub use knot::{build_knot_dictionary, KnotDictionary, StrandRecord};

/// Parse, validate, build and search in one call.
///
/// # Errors
///
/// Any [`McnError`] from the individual steps.
pub fn meridional_coloring_number<T, I>(tokens: I) -> Result<MinimumSeed, McnError>
where
    T: gauss::GaussToken,
    I: IntoIterator<Item = T>,
{
    let code = GaussCode::parse(tokens)?;
    let knot = KnotDictionary::build(&code);
    find_minimum_coloring_seed(&knot)
}
