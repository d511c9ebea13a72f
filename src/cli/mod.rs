// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seqcheck command-line interface.
//!
//! Two subcommands: `generate` writes a seeded operation stream, and `test`
//! replays one against a candidate list and the oracle. Argument validation
//! (counts, numeric parsing, candidate names) is clap's job; anything clap
//! rejects prints usage and exits nonzero before a file is touched.

pub mod display;
pub mod report;

use clap::{Parser, Subcommand};
use seqcheck::Candidate;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqcheck",
    about = "Differential tester for indexed-sequence implementations",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a deterministic pseudo-random operation stream
    Generate {
        /// Number of operations to write
        ops: u32,

        /// Random seed (unsigned 64-bit)
        seed: u64,

        /// Output path for the stream (created or truncated)
        output: PathBuf,
    },

    /// Replay a stream against a candidate and the oracle
    Test {
        /// Implementation under test
        #[arg(value_enum)]
        candidate: Candidate,

        /// Operation stream to replay
        input: PathBuf,

        /// Print both lists index-by-index before every operation
        #[arg(long, conflicts_with = "json")]
        trace: bool,

        /// Print the final report as JSON instead of a summary box
        #[arg(long)]
        json: bool,

        /// Cap the candidate's length; inserts past it fail with ALLOC_FAIL
        #[arg(long, value_name = "N")]
        max_len: Option<usize>,

        /// Stop printing mismatch diagnostics after this many (counting continues)
        #[arg(long, value_name = "N")]
        max_mismatches: Option<usize>,
    },
}
