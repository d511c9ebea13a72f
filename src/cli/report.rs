// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering of replay diagnostics and end-of-run summaries.
//!
//! Diagnostics go to stdout as they happen. Summaries go to stderr, so that a
//! clean replay leaves stdout empty.

use super::display::{
    field, mismatch_count, mismatch_header, section_bot, section_top, themed, verdict, GREEN, RED,
};
use seqcheck::{write_trace, GenerationSummary, Mismatch, ReplaySink, Report, Value};
use std::io;
use std::path::Path;
use std::time::Duration;

/// Colored diagnostics with an optional cap on how many mismatches print.
pub struct TerminalSink<W> {
    out: W,
    limit: Option<usize>,
    printed: usize,
    suppressed: usize,
}

impl<W: io::Write> TerminalSink<W> {
    pub fn new(out: W, limit: Option<usize>) -> Self {
        Self {
            out,
            limit,
            printed: 0,
            suppressed: 0,
        }
    }

    /// Mismatches seen but not printed because of the cap.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }
}

impl<W: io::Write> ReplaySink for TerminalSink<W> {
    fn trace(&mut self, line: usize, oracle: &[Value], candidate: &[Value]) -> io::Result<()> {
        write_trace(&mut self.out, line, oracle, candidate)
    }

    fn mismatch(&mut self, mismatch: &Mismatch) -> io::Result<()> {
        if self.limit.is_some_and(|limit| self.printed >= limit) {
            self.suppressed += 1;
            return Ok(());
        }
        self.printed += 1;
        writeln!(
            self.out,
            "{}",
            mismatch_header(mismatch.line, &mismatch.operation.to_string())
        )?;
        writeln!(
            self.out,
            "                ref  = {}",
            themed(GREEN, &[], &mismatch.oracle.to_string())
        )?;
        writeln!(
            self.out,
            "                test = {}",
            themed(RED, &[], &mismatch.candidate.to_string())
        )
    }
}

/// Boxed summary of a replay.
pub fn print_replay_summary(report: &Report, suppressed: usize, elapsed: Duration) {
    eprintln!("{}", section_top("REPLAY"));
    eprintln!("{}", field("candidate", report.candidate));
    eprintln!("{}", field("oracle", report.oracle));
    eprintln!("{}", field("operations", &report.operations.to_string()));
    let mut mismatches = mismatch_count(report.mismatch_count());
    if suppressed > 0 {
        mismatches.push_str(&format!(" ({} not printed)", suppressed));
    }
    eprintln!("{}", field("mismatches", &mismatches));
    eprintln!(
        "{}",
        field(
            "final size",
            &format!("ref = {}, test = {}", report.oracle_size, report.candidate_size)
        )
    );
    eprintln!(
        "{}",
        field("contents", &verdict(report.contents_match, "match", "DIFFER"))
    );
    eprintln!("{}", field("elapsed", &format!("{:.3}s", elapsed.as_secs_f64())));
    eprintln!("{}", section_bot());
}

/// Boxed summary of a generated stream.
pub fn print_generation_summary(path: &Path, seed: u64, summary: &GenerationSummary) {
    eprintln!("{}", section_top("GENERATE"));
    eprintln!("{}", field("output", &path.display().to_string()));
    eprintln!("{}", field("seed", &seed.to_string()));
    eprintln!("{}", field("operations", &summary.operations.to_string()));
    eprintln!(
        "{}",
        field(
            "mix",
            &format!(
                "add {} / remove {} / get {} / set {} / size {}",
                summary.adds, summary.removes, summary.gets, summary.sets, summary.sizes
            )
        )
    );
    eprintln!("{}", field("final size", &summary.final_size.to_string()));
    eprintln!("{}", section_bot());
}
