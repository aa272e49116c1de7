// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for Gauss code parsing and the coloring search.

use thiserror::Error;

/// Errors that can occur while computing a meridional coloring number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum McnError {
    /// A token could not be read as a signed integer.
    #[error("cannot parse {token:?} as a signed integer")]
    Format { token: String },

    /// The Gauss code does not pair every crossing with one over and one under entry.
    #[error("malformed Gauss code: {0}")]
    MalformedGaussCode(#[from] Malformation),

    /// More crossings than a `StrandSet` can hold.
    #[error("diagram has {strands} strands (max {max})")]
    TooManyStrands { strands: usize, max: usize },

    /// The search found no propagating seed, even at the fallback size.
    /// Never happens for a well-formed diagram.
    #[error("no propagating seed found for a diagram with {strands} strands")]
    NoSolutionFound { strands: usize },
}

/// The specific way in which a Gauss code is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    #[error("the code is empty")]
    Empty,

    #[error("entry {position} is zero")]
    ZeroEntry { position: usize },

    /// Every magnitude must occur exactly once with each sign.
    #[error("crossing {magnitude} occurs {positive} times over and {negative} times under")]
    Unpaired {
        magnitude: u32,
        positive: usize,
        negative: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = McnError::Format {
            token: "x1".to_string(),
        };
        assert_eq!(err.to_string(), "cannot parse \"x1\" as a signed integer");

        let err: McnError = Malformation::Unpaired {
            magnitude: 3,
            positive: 2,
            negative: 1,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "malformed Gauss code: crossing 3 occurs 2 times over and 1 times under"
        );
    }
}
