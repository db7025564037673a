// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the levdist command-line interface.
//!
//! Two subcommands: `compare` computes one distance and prints it (or the
//! reason it couldn't), `bench` times repeated computations of the same pair.
//! Both accept `--max` and `--units`, which can also come from
//! `LEVDIST_MAX_DISTANCE` and `LEVDIST_UNITS`.

pub mod display;
pub mod report;

use clap::{Args, Parser, Subcommand};
use levdist::CodeUnit;

#[derive(Parser, Debug)]
#[command(
    name = "levdist",
    about = "Levenshtein edit distance with an early-exit bound",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the edit distance between two strings
    ///
    /// Either string may be empty (""). Leaving one out entirely is an error,
    /// reported in place of the distance.
    Compare {
        /// First string
        first: Option<String>,

        /// Second string
        second: Option<String>,

        #[command(flatten)]
        options: DistanceOptions,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Time repeated distance computations for one pair of strings
    Bench {
        /// First string
        first: String,

        /// Second string
        second: String,

        #[command(flatten)]
        options: DistanceOptions,

        /// Number of timed runs to average over
        #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,
    },
}

/// Options shared by every subcommand that computes a distance.
#[derive(Args, Debug, Clone, Copy)]
pub struct DistanceOptions {
    /// Stop once the distance is known to exceed this bound
    ///
    /// Distances above the bound are reported as exceeded rather than exactly.
    #[arg(short, long, env = "LEVDIST_MAX_DISTANCE")]
    pub max: Option<usize>,

    /// What counts as one character
    #[arg(short, long, value_enum, default_value_t = CodeUnit::Char, env = "LEVDIST_UNITS")]
    pub units: CodeUnit,
}
