//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::operation::{Operation, OperationReader, Value};
use crate::sequence::{IndexedSequence, Outcome};

/// Parse a small inline script like `"add 0 5; add 1 7; size"`.
///
/// Statements are separated by `;` or newlines.
///
/// # Panics
/// Panics on malformed input; scripts are test fixtures.
pub fn script(text: &str) -> Vec<Operation> {
    let normalized = text.replace(';', "\n");
    OperationReader::new(normalized.as_bytes())
        .map(|item| match item {
            Ok((_, op)) => op,
            Err(err) => panic!("bad test script: {}", err),
        })
        .collect()
}

/// Apply every operation in order, collecting outcomes.
pub fn apply_all(list: &mut dyn IndexedSequence<Value>, ops: &[Operation]) -> Vec<Outcome<Value>> {
    ops.iter().map(|op| op.apply(list)).collect()
}

/// A list pre-filled with `values` via appends.
pub fn filled<L>(mut list: L, values: &[Value]) -> L
where
    L: IndexedSequence<Value>,
{
    for (i, &value) in values.iter().enumerate() {
        let index = i64::try_from(i).unwrap_or(i64::MAX);
        if list.add(index, value).is_err() {
            break;
        }
    }
    list
}
