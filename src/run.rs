// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! File-level entry points behind the two commands.
//!
//! Both functions own their file handles for the duration of the call. Every
//! exit path, including `?` on a parse error, drops and closes them.

use crate::error::Error;
use crate::generator::{GenerationSummary, StreamGenerator};
use crate::operation::OperationReader;
use crate::tester::{Candidate, DifferentialTester, Report, ReplaySink};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Knobs for a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Trace both lists' contents before every operation.
    pub trace: bool,
    /// Cap the candidate's length to simulate allocation failure.
    pub max_len: Option<usize>,
}

/// Generate `total_ops` operations from `seed` into `output`.
///
/// The file is created (or truncated) before anything is drawn, so an
/// unwritable path fails without producing output.
pub fn generate_file(
    output: &Path,
    total_ops: u32,
    seed: u64,
) -> Result<GenerationSummary, Error> {
    let file = File::create(output).map_err(|e| Error::io(output, e))?;
    let mut writer = BufWriter::new(file);
    StreamGenerator::new(total_ops, seed)
        .write_to(&mut writer)
        .map_err(|e| Error::io(output, e))
}

/// Replay the stream at `input` against `candidate` and the oracle.
pub fn replay_file(
    input: &Path,
    candidate: Candidate,
    options: ReplayOptions,
    sink: &mut dyn ReplaySink,
) -> Result<Report, Error> {
    let file = File::open(input).map_err(|e| Error::io(input, e))?;
    let reader = OperationReader::new(BufReader::new(file));
    DifferentialTester::for_candidate(candidate, options.max_len)
        .with_trace(options.trace)
        .run(reader, sink)
}
