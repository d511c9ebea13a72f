// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The indexed-sequence contract shared by every list under test.
//!
//! Indices are signed because operation streams deliberately carry negative
//! and past-the-end positions. Validation happens here, once, so every
//! implementation rejects exactly the same indices.
//!
//! | Operation | Valid indices       | Error on violation |
//! |-----------|---------------------|--------------------|
//! | `add`     | `0 <= i <= size`    | `Index`            |
//! | `get`     | `0 <= i < size`     | `Index`            |
//! | `set`     | `0 <= i < size`     | `Index`            |
//! | `remove`  | `0 <= i < size`     | `Index`            |
//!
//! `add` may additionally fail with `Allocation` when storage cannot grow.
//! Neither error leaves the list modified.

use serde::Serialize;
use std::fmt;

/// Signed position as it appears in an operation stream.
pub type Index = i64;

/// Per-operation failure. Recoverable: the list is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// Index outside the range valid for the attempted operation.
    Index { index: Index, size: usize },
    /// Storage could not grow to hold `requested` elements.
    Allocation { requested: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Index { index, size } => {
                write!(f, "index {} out of bounds for size {}", index, size)
            }
            SequenceError::Allocation { requested } => {
                write!(f, "cannot allocate storage for {} elements", requested)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Validate an index for `get`, `set` and `remove`.
///
/// INVARIANT: returns `Ok(i)` only when `0 <= i < size`.
#[inline]
pub fn element_index(index: Index, size: usize) -> Result<usize, SequenceError> {
    match usize::try_from(index) {
        Ok(i) if i < size => Ok(i),
        _ => Err(SequenceError::Index { index, size }),
    }
}

/// Validate an index for `add`.
///
/// INVARIANT: returns `Ok(i)` only when `0 <= i <= size`.
#[inline]
pub fn insert_index(index: Index, size: usize) -> Result<usize, SequenceError> {
    match usize::try_from(index) {
        Ok(i) if i <= size => Ok(i),
        _ => Err(SequenceError::Index { index, size }),
    }
}

/// A zero-based, index-addressed, ordered collection.
///
/// Implementations must be interchangeable: any of them can play oracle or
/// candidate in a differential run.
pub trait IndexedSequence<T> {
    /// Insert `value` at `index`, shifting later elements up by one.
    fn add(&mut self, index: Index, value: T) -> Result<(), SequenceError>;

    /// Borrow the element at `index`.
    fn get(&self, index: Index) -> Result<&T, SequenceError>;

    /// Replace the element at `index`, returning the previous value.
    fn set(&mut self, index: Index, value: T) -> Result<T, SequenceError>;

    /// Remove and return the element at `index`, shifting later elements down.
    fn remove(&mut self, index: Index) -> Result<T, SequenceError>;

    /// Number of elements. O(1) and infallible.
    fn size(&self) -> usize;

    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Copy out all elements in order.
    ///
    /// The default goes through `get`, which is quadratic for lists with
    /// linear positional access. Such lists should override it.
    fn contents(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.size())
            .filter_map(|i| Index::try_from(i).ok())
            .filter_map(|i| self.get(i).ok().cloned())
            .collect()
    }
}

/// What a single operation produced on one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The operation succeeded, possibly returning or observing a value.
    Success(Option<T>),
    /// `SequenceError::Index`.
    IndexError,
    /// `SequenceError::Allocation`.
    AllocationError,
}

impl<T> Outcome<T> {
    /// Fold a contract result into an outcome, keeping the returned value.
    pub fn from_result(result: Result<T, SequenceError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(Some(value)),
            Err(err) => Outcome::from_error(err),
        }
    }

    /// Fold a contract result that returns nothing.
    pub fn from_unit(result: Result<(), SequenceError>) -> Self {
        match result {
            Ok(()) => Outcome::Success(None),
            Err(err) => Outcome::from_error(err),
        }
    }

    pub fn from_error(err: SequenceError) -> Self {
        match err {
            SequenceError::Index { .. } => Outcome::IndexError,
            SequenceError::Allocation { .. } => Outcome::AllocationError,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Kind label without the value.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "SUCCESS",
            Outcome::IndexError => "INDEX_FAIL",
            Outcome::AllocationError => "ALLOC_FAIL",
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(Some(value)) => write!(f, "{:>10} / {:>9}", self.kind(), value),
            _ => write!(f, "{:>10}", self.kind()),
        }
    }
}
