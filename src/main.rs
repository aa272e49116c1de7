// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `mcn`: meridional coloring number of a knot diagram from its Gauss code.
//!
//! ```text
//! mcn 1 -4 3 -1 2 -3 4 -2
//! mcn -v 1, -4, 3, -1, 2, -3, 4, -2
//! ```
//!
//! Flags must come before the Gauss code: once the code starts, every
//! remaining argument is read as part of it.

use clap::{ArgAction, Parser};
use meridional_coloring::coloring::SeedSearch;
use meridional_coloring::gauss::GaussCode;
use meridional_coloring::knot::KnotDictionary;
use meridional_coloring::render::KnotTable;
use meridional_coloring::state::Counters;
use meridional_coloring::McnError;
use std::process::ExitCode;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
#[command(
    name = "mcn",
    about = "Calculate meridional coloring number of a knot diagram from its Gauss code"
)]
struct Cli {
    /// Only print the meridional coloring number
    #[arg(short, long, action = ArgAction::SetTrue)]
    quiet: bool,

    /// Also print the knot dictionary and the seed strand set
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Gauss code entries, with or without separating commas
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    gauss_code: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), McnError> {
    let code = GaussCode::parse(&cli.gauss_code)?;
    let knot = KnotDictionary::build(&code);
    if cli.verbose {
        eprintln!(
            "[mcn] {} crossings, {} strands",
            code.crossing_count(),
            knot.len()
        );
    }

    let mut search = SeedSearch::new(&knot);
    let minimum = search.run()?;

    if cli.verbose {
        if minimum.is_fallback() {
            eprintln!(
                "[mcn] no seed below {} strands propagates",
                knot.len().saturating_sub(1)
            );
        }
        let count = search.count_propagating_seeds(minimum.size());
        for counter in Counters::iter() {
            eprintln!("[mcn] {}: {}", counter, search.statistics().get(counter));
        }

        println!();
        print!("{}", KnotTable(&knot));
        println!();
        println!("Seed strand set: {}", minimum.seed());
        println!("Minimum seed sets: {}", count);
        println!("Meridional coloring number: {}", minimum.size());
    } else if cli.quiet {
        println!("{}", minimum.size());
    } else {
        println!("Meridional coloring number: {}", minimum.size());
    }
    Ok(())
}
