//! Trusted reference implementation.
//!
//! A thin adapter from the standard `Vec` onto the sequence contract. All the
//! work is done by the standard library; this file only validates indices so
//! that out-of-range operations report `IndexError` instead of panicking.

use crate::sequence::{element_index, insert_index, Index, IndexedSequence, SequenceError};

/// Oracle list backed by `Vec<T>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecOracle<T> {
    storage: Vec<T>,
}

impl<T> VecOracle<T> {
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }
}

impl<T> From<Vec<T>> for VecOracle<T> {
    fn from(storage: Vec<T>) -> Self {
        Self { storage }
    }
}

impl<T> IndexedSequence<T> for VecOracle<T> {
    fn add(&mut self, index: Index, value: T) -> Result<(), SequenceError> {
        let at = insert_index(index, self.storage.len())?;
        self.storage.insert(at, value);
        Ok(())
    }

    fn get(&self, index: Index) -> Result<&T, SequenceError> {
        let at = element_index(index, self.storage.len())?;
        Ok(&self.storage[at])
    }

    fn set(&mut self, index: Index, value: T) -> Result<T, SequenceError> {
        let at = element_index(index, self.storage.len())?;
        Ok(std::mem::replace(&mut self.storage[at], value))
    }

    fn remove(&mut self, index: Index) -> Result<T, SequenceError> {
        let at = element_index(index, self.storage.len())?;
        Ok(self.storage.remove(at))
    }

    fn size(&self) -> usize {
        self.storage.len()
    }

    fn name(&self) -> &'static str {
        "oracle"
    }

    fn contents(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.storage.clone()
    }
}
