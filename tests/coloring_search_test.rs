// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimum seed search tests.
//!
//! Knots with bridge number b have meridional coloring number b on these
//! standard diagrams: 2 for the two-bridge knots, 3 for the granny knot
//! (trefoil # trefoil), 4 for the triple sum.

use meridional_coloring::coloring::{closure, find_minimum_coloring_seed, propagates, SeedSearch};
use meridional_coloring::diagram::{StrandLabel, StrandSet};
use meridional_coloring::error::Malformation;
use meridional_coloring::knot::build_knot_dictionary;
use meridional_coloring::state::Counters;
use meridional_coloring::{meridional_coloring_number, McnError};

fn mcn(code: &[i32]) -> (usize, String, bool) {
    let knot = build_knot_dictionary(code).unwrap();
    let minimum = find_minimum_coloring_seed(&knot).unwrap();
    assert!(propagates(minimum.seed(), &knot));
    assert_eq!(minimum.seed().len(), minimum.size());
    (minimum.size(), minimum.seed().to_string(), minimum.is_fallback())
}

#[test]
fn test_usage_example() {
    assert_eq!(
        mcn(&[1, -4, 3, -1, 2, -3, 4, -2]),
        (2, "{A, B}".to_string(), false)
    );
}

#[test]
fn test_trefoil() {
    assert_eq!(mcn(&[1, -3, 2, -1, 3, -2]), (2, "{A, B}".to_string(), true));
}

#[test]
fn test_five_crossings() {
    // {A, B} is stuck; {A, C} is the first seed that propagates.
    assert_eq!(
        mcn(&[-1, 4, -2, 5, -3, 1, -4, 2, -5, 3]),
        (2, "{A, C}".to_string(), false)
    );
}

#[test]
fn test_ten_crossings() {
    assert_eq!(
        mcn(&[1, -2, 3, -4, 5, -6, 7, -8, 9, -10, 2, -1, 4, -3, 6, -5, 8, -7, 10, -9]),
        (2, "{A, E}".to_string(), false)
    );
}

#[test]
fn test_granny_knot() {
    let knot = build_knot_dictionary(&[1, -2, 3, -1, 2, -3, 4, -5, 6, -4, 5, -6]).unwrap();
    let mut search = SeedSearch::new(&knot);
    let minimum = search.run().unwrap();

    assert_eq!(minimum.size(), 3);
    assert_eq!(minimum.seed().to_string(), "{A, B, D}");
    // All 15 pairs fail, then {A, B, C} before {A, B, D}.
    assert_eq!(search.statistics().get(Counters::SeedsTested), 17);
    assert_eq!(search.statistics().get(Counters::SeedSizes), 2);
}

#[test]
fn test_triple_sum() {
    assert_eq!(
        mcn(&[1, -2, 3, -1, 2, -3, 4, -5, 6, -4, 5, -6, 7, -8, 9, -7, 8, -9]),
        (4, "{A, B, D, G}".to_string(), false)
    );
}

#[test]
fn test_two_crossings_fall_back_to_one() {
    assert_eq!(mcn(&[1, -2, 2, -1]), (1, "{A}".to_string(), true));
    assert_eq!(mcn(&[1, -1, 2, -2]), (1, "{A}".to_string(), true));
    assert_eq!(mcn(&[1, 2, -1, -2]), (1, "{B}".to_string(), true));
}

#[test]
fn test_search_is_idempotent() {
    let knot = build_knot_dictionary(&[-1, 2, -3, 1, -4, 5, -2, 3, -5, 4]).unwrap();
    let first = find_minimum_coloring_seed(&knot).unwrap();
    let second = find_minimum_coloring_seed(&knot).unwrap();
    assert_eq!(first, second);

    let mut search = SeedSearch::new(&knot);
    assert_eq!(search.run().unwrap(), first);
    assert_eq!(search.run().unwrap(), first);
}

#[test]
fn test_no_smaller_seed_propagates() {
    let knot = build_knot_dictionary(&[1, -2, 3, -1, 2, -3, 4, -5, 6, -4, 5, -6]).unwrap();
    let mut search = SeedSearch::new(&knot);
    assert_eq!(search.count_propagating_seeds(2), 0);
    assert!(search.count_propagating_seeds(3) > 0);
}

#[test]
fn test_count_propagating_seeds() {
    let knot = build_knot_dictionary(&[1, -4, 3, -1, 2, -3, 4, -2]).unwrap();
    let mut search = SeedSearch::new(&knot);
    // Every pair of the four strands propagates.
    assert_eq!(search.count_propagating_seeds(2), 6);
}

#[test]
fn test_full_set_always_propagates() {
    let codes: &[&[i32]] = &[
        &[1, -1],
        &[1, 2, -1, -2],
        &[1, -4, 3, -1, 2, -3, 4, -2],
        &[1, -2, 3, -1, 2, -3, 4, -5, 6, -4, 5, -6],
    ];
    for code in codes {
        let knot = build_knot_dictionary(code).unwrap();
        assert!(propagates(knot.all_strands(), &knot));
    }
}

#[test]
fn test_propagation_is_monotone() {
    let knot = build_knot_dictionary(&[1, -2, 3, -1, 2, -3, 4, -5, 6, -4, 5, -6]).unwrap();
    let strands = knot.len();
    for bits in 0u64..(1 << strands) {
        let seed: StrandSet = (0..strands)
            .filter(|&i| bits & (1 << i) != 0)
            .map(StrandLabel::new)
            .collect();
        let colored = closure(seed, &knot);
        assert!(seed.is_subset(colored));
        for extra in knot.labels() {
            let mut bigger = seed;
            bigger.insert(extra);
            assert!(colored.is_subset(closure(bigger, &knot)));
        }
    }
}

#[test]
fn test_from_tokens() {
    let minimum = meridional_coloring_number(["1,", "-4,", "3,", "-1,", "2,", "-3,", "4,", "-2"]);
    assert_eq!(minimum.unwrap().size(), 2);
}

#[test]
fn test_malformed_input_is_rejected() {
    assert_eq!(
        meridional_coloring_number([1, -1, 1, 2, -2]),
        Err(McnError::MalformedGaussCode(Malformation::Unpaired {
            magnitude: 1,
            positive: 2,
            negative: 1
        }))
    );
    assert_eq!(
        meridional_coloring_number(Vec::<i32>::new()),
        Err(McnError::MalformedGaussCode(Malformation::Empty))
    );
    assert_eq!(
        meridional_coloring_number(["1", "-1", "two"]),
        Err(McnError::Format {
            token: "two".to_string()
        })
    );
}
