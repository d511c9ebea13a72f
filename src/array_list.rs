// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contiguous growable-buffer list.
//!
//! A fixed-size slot buffer plus a separate length. Occupied slots are
//! `[0, size)`; the rest are `None`. When an insert would overflow the
//! buffer, a new one of `max(2, capacity * 2)` slots is allocated fallibly and
//! the elements are moved across. The buffer never shrinks.
//!
//! Inserts and removals shift the tail with `rotate_right` / `rotate_left`
//! over the affected window, so the cost is O(size - index) moves.

use crate::sequence::{element_index, insert_index, Index, IndexedSequence, SequenceError};
use crate::verify::contracts::check_buffer_occupancy;

/// Growth rule: double, starting from two slots.
///
/// INVARIANT: result > capacity for every capacity below `usize::MAX / 2`.
#[inline]
pub fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(2)
}

/// Indexed list over a contiguous buffer.
#[derive(Debug, Clone)]
pub struct ArrayList<T> {
    slots: Box<[Option<T>]>,
    size: usize,
    max_len: Option<usize>,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Empty list with zero capacity. Nothing is allocated until the first add.
    pub fn new() -> Self {
        Self {
            slots: Box::new([]),
            size: 0,
            max_len: None,
        }
    }

    /// Empty list that refuses to grow past `max_len` elements.
    ///
    /// Inserts beyond the limit fail with `SequenceError::Allocation`, which
    /// lets a run simulate allocator exhaustion deterministically.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::new()
        }
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Configured length limit, if any.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Iterate over the occupied prefix in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.size].iter().flatten()
    }

    /// Occupied and spare slots, for structural validation.
    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Make room for one more element.
    ///
    /// On failure the existing buffer is untouched.
    fn ensure_room(&mut self) -> Result<(), SequenceError> {
        let needed = self.size + 1;
        if let Some(limit) = self.max_len {
            if needed > limit {
                return Err(SequenceError::Allocation { requested: needed });
            }
        }
        if needed <= self.capacity() {
            return Ok(());
        }

        let new_capacity = grown_capacity(self.capacity());
        let mut grown: Vec<Option<T>> = Vec::new();
        grown
            .try_reserve_exact(new_capacity)
            .map_err(|_| SequenceError::Allocation {
                requested: new_capacity,
            })?;

        let old = std::mem::take(&mut self.slots);
        grown.extend(old.into_vec().into_iter().take(self.size));
        grown.resize_with(new_capacity, || None);
        self.slots = grown.into_boxed_slice();
        Ok(())
    }
}

impl<T> IndexedSequence<T> for ArrayList<T> {
    fn add(&mut self, index: Index, value: T) -> Result<(), SequenceError> {
        let at = insert_index(index, self.size)?;
        self.ensure_room()?;

        // Drop the value in the first free slot, then rotate it into place.
        self.slots[self.size] = Some(value);
        self.slots[at..=self.size].rotate_right(1);
        self.size += 1;

        check_buffer_occupancy(&self.slots, self.size);
        Ok(())
    }

    fn get(&self, index: Index) -> Result<&T, SequenceError> {
        let at = element_index(index, self.size)?;
        self.slots[at]
            .as_ref()
            .ok_or(SequenceError::Index { index, size: self.size })
    }

    fn set(&mut self, index: Index, value: T) -> Result<T, SequenceError> {
        let at = element_index(index, self.size)?;
        self.slots[at]
            .replace(value)
            .ok_or(SequenceError::Index { index, size: self.size })
    }

    fn remove(&mut self, index: Index) -> Result<T, SequenceError> {
        let at = element_index(index, self.size)?;
        let size = self.size;
        let removed = self.slots[at]
            .take()
            .ok_or(SequenceError::Index { index, size })?;

        // The emptied slot travels to the end of the occupied prefix.
        self.slots[at..size].rotate_left(1);
        self.size -= 1;

        check_buffer_occupancy(&self.slots, self.size);
        Ok(removed)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn name(&self) -> &'static str {
        "array-list"
    }

    fn contents(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
