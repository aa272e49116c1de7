// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crossing resolution.
//!
//! Every positive entry `v` inside a strand is a crossing that the strand
//! passes over. Underneath it, the knot is broken into two strands: the one
//! that begins at `-v` and the one that ends at `-v`. Resolving a strand means
//! recording that pair for each of its over-crossings, in order.

use crate::diagram::StrandLabel;
use crate::knot::strands::Strand;
use crate::knot::{OverCrossing, StrandRecord};
use std::collections::HashMap;

/// The two strands meeting underneath one crossing.
#[derive(Debug, Default, Clone, Copy)]
struct UnderPair {
    beginning: Option<StrandLabel>,
    ending: Option<StrandLabel>,
}

/// Attach the over-crossings to each strand.
///
/// Builds the index `magnitude -> (strand beginning at -magnitude, strand
/// ending at -magnitude)` once, then resolves every positive entry with two
/// lookups.
///
/// # Panics
///
/// Panics if an over-crossing has no matching under-crossing, which cannot
/// happen for strands extracted from a validated `GaussCode`.
pub fn resolve_crossings(strands: Vec<Strand>) -> Vec<StrandRecord> {
    let mut under: HashMap<u32, UnderPair> = HashMap::with_capacity(strands.len());
    for strand in &strands {
        if let (Some(&first), Some(&last)) =
            (strand.subsequence.first(), strand.subsequence.last())
        {
            under.entry(first.unsigned_abs()).or_default().beginning = Some(strand.label);
            under.entry(last.unsigned_abs()).or_default().ending = Some(strand.label);
        }
    }

    strands
        .into_iter()
        .map(|strand| {
            let crossings_over = strand
                .subsequence
                .iter()
                .filter(|&&entry| entry > 0)
                .map(|&entry| {
                    let magnitude = entry.unsigned_abs();
                    let pair = under.get(&magnitude).copied().unwrap_or_default();
                    match (pair.beginning, pair.ending) {
                        (Some(beginning), Some(ending)) => OverCrossing {
                            magnitude,
                            beginning,
                            ending,
                        },
                        _ => panic!("Crossing {} has no under-crossing strands", magnitude),
                    }
                })
                .collect();

            StrandRecord {
                label: strand.label,
                start: strand.start,
                subsequence: strand.subsequence,
                crossings_over,
            }
        })
        .collect()
}
