// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lockstep differential replay of an operation stream.
//!
//! For every operation the tester optionally traces both lists' contents,
//! applies the operation to the oracle, then to the candidate, and compares
//! the two outcomes in full (kind and value). A disagreement becomes a
//! [`Mismatch`] that is handed to the [`ReplaySink`] and recorded in the
//! [`Report`]; replay then carries on with whatever state each list is in.
//!
//! ```text
//! Reading ──▶ Applying ──▶ Comparing ──┐
//!    ▲                                 │
//!    └─────────────────────────────────┘
//!    │ stream exhausted / parse error
//!    ▼
//!  Done
//! ```
//!
//! Only a malformed line ends a replay early, and it does so before any later
//! line is read. Mismatches never do.

use crate::array_list::ArrayList;
use crate::error::Error;
use crate::linked_list::LinkedList;
use crate::operation::{Operation, OperationReader, Value};
use crate::oracle::VecOracle;
use crate::sequence::{IndexedSequence, Outcome};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::io::{self, BufRead};

/// Registry of implementations that can be put under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Candidate {
    /// Contiguous growable buffer.
    ArrayList,
    /// Sentinel-bounded doubly linked list.
    LinkedList,
    /// The oracle itself, as a sanity baseline.
    Oracle,
}

impl Candidate {
    pub const ALL: [Candidate; 3] = [Candidate::ArrayList, Candidate::LinkedList, Candidate::Oracle];

    pub fn name(self) -> &'static str {
        match self {
            Candidate::ArrayList => "array-list",
            Candidate::LinkedList => "linked-list",
            Candidate::Oracle => "oracle",
        }
    }

    /// Look up a registry entry by its identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Fresh, empty instance. `max_len` caps its length to simulate
    /// allocation failure; the oracle ignores it.
    pub fn build(self, max_len: Option<usize>) -> Box<dyn IndexedSequence<Value>> {
        match (self, max_len) {
            (Candidate::ArrayList, Some(limit)) => Box::new(ArrayList::<Value>::with_max_len(limit)),
            (Candidate::ArrayList, None) => Box::new(ArrayList::<Value>::new()),
            (Candidate::LinkedList, Some(limit)) => Box::new(LinkedList::<Value>::with_max_len(limit)),
            (Candidate::LinkedList, None) => Box::new(LinkedList::<Value>::new()),
            (Candidate::Oracle, _) => Box::new(VecOracle::<Value>::new()),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One line on which oracle and candidate disagreed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// 1-based line in the stream.
    pub line: usize,
    pub operation: Operation,
    pub oracle: Outcome<Value>,
    pub candidate: Outcome<Value>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MISMATCH <{:>9}>: {}", self.line, self.operation)?;
        writeln!(f, "                ref  = {}", self.oracle)?;
        write!(f, "                test = {}", self.candidate)
    }
}

/// Where replay diagnostics go.
pub trait ReplaySink {
    /// Index-by-index contents of both lists before `line` is applied.
    ///
    /// Rows are labelled with the line about to run, so the first trace of a
    /// stream carries line 1 and shows two empty lists.
    fn trace(&mut self, line: usize, oracle: &[Value], candidate: &[Value]) -> io::Result<()>;

    /// A disagreement on `mismatch.line`.
    fn mismatch(&mut self, mismatch: &Mismatch) -> io::Result<()>;
}

/// Plain-text diagnostics to any writer.
pub struct PlainSink<W> {
    out: W,
}

impl<W: io::Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> ReplaySink for PlainSink<W> {
    fn trace(&mut self, line: usize, oracle: &[Value], candidate: &[Value]) -> io::Result<()> {
        write_trace(&mut self.out, line, oracle, candidate)
    }

    fn mismatch(&mut self, mismatch: &Mismatch) -> io::Result<()> {
        writeln!(self.out, "{}", mismatch)
    }
}

/// Render a content trace. A size disagreement prints one line instead of
/// rows, since rows would not line up.
pub fn write_trace<W: io::Write>(
    out: &mut W,
    line: usize,
    oracle: &[Value],
    candidate: &[Value],
) -> io::Result<()> {
    if oracle.len() != candidate.len() {
        return writeln!(
            out,
            "<{}> size mismatch: ref = {}, test = {}",
            line,
            oracle.len(),
            candidate.len()
        );
    }
    for (i, (rv, tv)) in oracle.iter().zip(candidate).enumerate() {
        let marker = if rv != tv { "***" } else { "" };
        writeln!(out, "<{}> [{}]\t{}\t{}\t{}", line, i, rv, tv, marker)?;
    }
    writeln!(out, "-----\n")
}

/// Where a replay currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    Reading,
    Applying,
    Comparing,
    Done,
}

/// Outcome of a whole replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub oracle: &'static str,
    pub candidate: &'static str,
    /// Operations applied.
    pub operations: usize,
    pub mismatches: Vec<Mismatch>,
    pub oracle_size: usize,
    pub candidate_size: usize,
    /// Whether both lists ended with identical contents.
    pub contents_match: bool,
}

impl Report {
    pub fn mismatch_count(&self) -> usize {
        self.mismatches.len()
    }

    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.contents_match
    }
}

/// Oracle and candidate replayed in lockstep.
pub struct DifferentialTester {
    oracle: Box<dyn IndexedSequence<Value>>,
    candidate: Box<dyn IndexedSequence<Value>>,
    trace: bool,
    state: ReplayState,
}

impl DifferentialTester {
    pub fn new(
        oracle: Box<dyn IndexedSequence<Value>>,
        candidate: Box<dyn IndexedSequence<Value>>,
    ) -> Self {
        Self {
            oracle,
            candidate,
            trace: false,
            state: ReplayState::Reading,
        }
    }

    /// Registry candidate against the standard oracle.
    pub fn for_candidate(candidate: Candidate, max_len: Option<usize>) -> Self {
        Self::new(Box::new(VecOracle::<Value>::new()), candidate.build(max_len))
    }

    /// Emit a content trace before every operation.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn oracle(&self) -> &dyn IndexedSequence<Value> {
        self.oracle.as_ref()
    }

    pub fn candidate(&self) -> &dyn IndexedSequence<Value> {
        self.candidate.as_ref()
    }

    /// Apply one operation to both lists and compare.
    pub fn step(&mut self, line: usize, op: Operation) -> Option<Mismatch> {
        self.state = ReplayState::Applying;
        let oracle = op.apply(self.oracle.as_mut());
        let candidate = op.apply(self.candidate.as_mut());

        self.state = ReplayState::Comparing;
        let mismatch = (oracle != candidate).then_some(Mismatch {
            line,
            operation: op,
            oracle,
            candidate,
        });
        self.state = ReplayState::Reading;
        mismatch
    }

    /// Replay a stream to the end, or to its first malformed line.
    pub fn run<R: BufRead>(
        &mut self,
        reader: OperationReader<R>,
        sink: &mut dyn ReplaySink,
    ) -> Result<Report, Error> {
        let mut operations = 0usize;
        let mut mismatches = Vec::new();

        for item in reader {
            let (line, op) = match item {
                Ok(parsed) => parsed,
                Err(err) => {
                    self.state = ReplayState::Done;
                    return Err(err.into());
                }
            };

            if self.trace {
                sink.trace(line, &self.oracle.contents(), &self.candidate.contents())
                    .map_err(Error::Output)?;
            }

            operations += 1;
            if let Some(mismatch) = self.step(line, op) {
                sink.mismatch(&mismatch).map_err(Error::Output)?;
                mismatches.push(mismatch);
            }
        }
        self.state = ReplayState::Done;

        Ok(Report {
            oracle: self.oracle.name(),
            candidate: self.candidate.name(),
            operations,
            mismatches,
            oracle_size: self.oracle.size(),
            candidate_size: self.candidate.size(),
            contents_match: self.oracle.contents() == self.candidate.contents(),
        })
    }
}
