// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering of knot dictionaries.

use crate::knot::{KnotDictionary, StrandRecord};
use std::fmt;

/// Table view of a knot dictionary, one row per strand.
///
/// ```
/// use meridional_coloring::knot::build_knot_dictionary;
/// use meridional_coloring::render::KnotTable;
///
/// let knot = build_knot_dictionary(&[1, -2, 2, -1]).unwrap();
/// let table = KnotTable(&knot).to_string();
/// assert!(table.contains("(-2, 2, -1)"));
/// ```
pub struct KnotTable<'a>(pub &'a KnotDictionary);

/// `(-4, 3, -1)`
fn subsequence(record: &StrandRecord) -> String {
    let entries: Vec<String> = record.subsequence().iter().map(|v| v.to_string()).collect();
    format!("({})", entries.join(", "))
}

/// `(C, B) (D, C)`
fn crossings(record: &StrandRecord) -> String {
    let pairs: Vec<String> = record
        .crossings_over()
        .iter()
        .map(|c| format!("({}, {})", c.beginning(), c.ending()))
        .collect();
    pairs.join(" ")
}

impl fmt::Display for KnotTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Knot dictionary:")?;
        writeln!(f)?;
        let header = format!("{:^15}{:<30}{}", "STRAND", "SUBSEQUENCE", "CROSSINGS OVER");
        writeln!(f, "{}", header.trim_end())?;
        for record in self.0 {
            let row = format!(
                "{:^15}{:<30}{}",
                record.label(),
                subsequence(record),
                crossings(record)
            );
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}
