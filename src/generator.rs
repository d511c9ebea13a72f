// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic operation-stream generation.
//!
//! A stream is a pure function of `(total_ops, seed)`. Each line picks one of
//! the five operation kinds uniformly, then draws its operands:
//!
//! - **index**: uniform over `[-(size / 4), size + size / 4]`, where `size` is
//!   the length the list will have when this line is replayed. Roughly a third
//!   of draws land outside the valid range, so boundary handling gets steady
//!   coverage.
//! - **value**: uniform over `[0, total_ops)`. Values only need to be distinct
//!   enough to expose misplaced elements.
//!
//! To know `size`, the generator replays its own output against an internal
//! tracker list. The line is emitted first and applied second, so the order
//! on disk is exactly the order a reader will replay.
//!
//! Draw order per line is fixed (kind, index, value) and the RNG is
//! `StdRng` seeded via `seed_from_u64`, pinned through `rand 0.8`.

use crate::array_list::ArrayList;
use crate::operation::{Operation, Value};
use crate::sequence::{Index, IndexedSequence, Outcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;

/// Counts reported after a stream is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub operations: u64,
    pub adds: u64,
    pub removes: u64,
    pub gets: u64,
    pub sets: u64,
    pub sizes: u64,
    /// Tracker length after the last line.
    pub final_size: usize,
}

impl GenerationSummary {
    fn record(&mut self, op: &Operation) {
        self.operations += 1;
        match op {
            Operation::Add { .. } => self.adds += 1,
            Operation::Remove { .. } => self.removes += 1,
            Operation::Get { .. } => self.gets += 1,
            Operation::Set { .. } => self.sets += 1,
            Operation::Size => self.sizes += 1,
        }
    }
}

/// Produces the operations of one stream, in order.
///
/// Iterating yields exactly `total_ops` operations; the tracker is updated as
/// each one is handed out.
#[derive(Debug)]
pub struct StreamGenerator {
    total_ops: u32,
    emitted: u32,
    rng: StdRng,
    tracker: ArrayList<Value>,
}

impl StreamGenerator {
    pub fn new(total_ops: u32, seed: u64) -> Self {
        Self {
            total_ops,
            emitted: 0,
            rng: StdRng::seed_from_u64(seed),
            tracker: ArrayList::new(),
        }
    }

    /// Length the next emitted operation will see.
    pub fn current_size(&self) -> usize {
        self.tracker.size()
    }

    /// Write the whole stream, one operation per line.
    pub fn write_to<W: io::Write>(mut self, out: &mut W) -> io::Result<GenerationSummary> {
        let mut summary = GenerationSummary::default();
        while let Some(op) = self.draw() {
            writeln!(out, "{}", op)?;
            self.track(&op);
            summary.record(&op);
        }
        out.flush()?;
        summary.final_size = self.tracker.size();
        Ok(summary)
    }

    /// Draw the next operation without applying it.
    fn draw(&mut self) -> Option<Operation> {
        if self.emitted >= self.total_ops {
            return None;
        }
        self.emitted += 1;

        let op = match self.rng.gen_range(0..5u32) {
            0 => {
                let index = self.random_index();
                let value = self.random_value();
                Operation::Add { index, value }
            }
            1 => Operation::Remove {
                index: self.random_index(),
            },
            2 => Operation::Get {
                index: self.random_index(),
            },
            3 => {
                let index = self.random_index();
                let value = self.random_value();
                Operation::Set { index, value }
            }
            _ => Operation::Size,
        };
        Some(op)
    }

    /// Keep the tracker's length in step with what a replay will see.
    fn track(&mut self, op: &Operation) {
        if !op.is_mutation() {
            return;
        }
        let before = self.tracker.size();
        match op.apply(&mut self.tracker) {
            Outcome::Success(_) => {
                debug_assert_ne!(before, self.tracker.size());
            }
            // Out-of-range positions are emitted on purpose. A rejected
            // mutation leaves the length alone, which is all the tracker is for.
            Outcome::IndexError | Outcome::AllocationError => {
                debug_assert_eq!(before, self.tracker.size());
            }
        }
    }

    /// Index biased a quarter of the length past each boundary.
    fn random_index(&mut self) -> Index {
        let (lower, upper) = index_range(self.tracker.size());
        self.rng.gen_range(lower..=upper)
    }

    fn random_value(&mut self) -> Value {
        Value::from(self.rng.gen_range(0..self.total_ops))
    }
}

impl Iterator for StreamGenerator {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        let op = self.draw()?;
        self.track(&op);
        Some(op)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total_ops - self.emitted) as usize;
        (left, Some(left))
    }
}

/// Inclusive index range drawn from for a list of length `size`.
///
/// INVARIANT: `lower <= 0 <= size <= upper`.
pub fn index_range(size: usize) -> (Index, Index) {
    let size = Index::try_from(size).unwrap_or(Index::MAX / 2);
    let quarter = size / 4;
    (-quarter, size + quarter)
}

/// Render a full stream to a string. Convenient for tests and small runs.
pub fn generate_string(total_ops: u32, seed: u64) -> String {
    let mut out = Vec::new();
    StreamGenerator::new(total_ops, seed)
        .write_to(&mut out)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("operations render as ASCII")
}
