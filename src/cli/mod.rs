// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bifm command-line interface.
//!
//! Three subcommands over a sequence file: `count` and `locate` for exact
//! matches of a pattern, and `explore` to list every symbol that extends a seed
//! to the right, walked with the cursor's cycling.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "bifm",
    about = "Bidirectional FM-index search over sequence files",
    version
)]
pub struct Cli {
    /// Sequence alphabet of the input
    #[arg(short, long, value_enum, default_value = "dna4", global = true)]
    pub alphabet: AlphabetArg,

    /// Log index construction and cursor steps (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlphabetArg {
    Dna4,
    Dna5,
    Protein,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count occurrences of a pattern
    Count {
        /// Sequence file: one sequence per line, or FASTA-style `>` headers
        input: String,

        /// Pattern to search for
        pattern: String,
    },

    /// List every occurrence of a pattern as `text_id<TAB>position`
    Locate {
        /// Sequence file: one sequence per line, or FASTA-style `>` headers
        input: String,

        /// Pattern to search for
        pattern: String,

        /// Maximum number of occurrences to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show every single-symbol right extension of a seed and its count
    Explore {
        /// Sequence file: one sequence per line, or FASTA-style `>` headers
        input: String,

        /// Seed pattern (may be empty)
        #[arg(default_value = "")]
        seed: String,
    },
}
