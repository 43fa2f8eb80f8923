//! # mmparser
//!
//! Command-line front end for the Micro-Manager filename parser.
//!
//! ## Usage
//!
//! ```bash
//! # Print dataset identifiers
//! mmparser parse Cos7_Microtubules_A647_3_MMStack_Pos0_locResults.dat
//!
//! # Widefield images, JSON output
//! mmparser parse --type widefield-image --json HeLa_WF13_MMStack_Pos0.ome.tif
//!
//! # Find files that map to the same dataset
//! mmparser group --duplicates data/*.dat
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
