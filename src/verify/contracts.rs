// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts checked right after each mutation.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **O(1)**, looking only at the slots or nodes a mutation touched
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Invariant                                        |
//! |--------------------------|--------------------------------------------------|
//! | `check_buffer_occupancy` | last occupied slot filled, first spare slot empty |
//! | `check_splice_links`     | `node.next.prev == node && node.prev.next == node` |

use crate::linked_list::{Node, NodeId};

/// Check the boundary between the occupied prefix and the spare slots.
///
/// # Panics (debug builds only)
/// Panics if slot `size - 1` is empty or slot `size` is occupied.
#[inline]
pub fn check_buffer_occupancy<T>(slots: &[Option<T>], size: usize) {
    // INVARIANT: size <= capacity
    debug_assert!(
        size <= slots.len(),
        "Contract violation: size {} > capacity {}",
        size,
        slots.len()
    );
    // INVARIANT: occupied slots are exactly [0, size)
    if size > 0 {
        debug_assert!(
            slots[size - 1].is_some(),
            "Contract violation: last occupied slot {} is empty",
            size - 1
        );
    }
    if size < slots.len() {
        debug_assert!(
            slots[size].is_none(),
            "Contract violation: first spare slot {} holds a value",
            size
        );
    }
}

/// Check that `node` and its neighbours agree on their links.
///
/// # Panics (debug builds only)
/// Panics if either neighbour does not point back at `node`.
#[inline]
pub(crate) fn check_splice_links<T>(nodes: &[Node<T>], node: NodeId) {
    let this = &nodes[node.slot()];
    // INVARIANT: successor's predecessor is this node
    if let Some(next) = this.next {
        debug_assert!(
            nodes[next.slot()].prev == Some(node),
            "Contract violation: slot {}.next.prev != self",
            node.slot()
        );
    }
    // INVARIANT: predecessor's successor is this node
    if let Some(prev) = this.prev {
        debug_assert!(
            nodes[prev.slot()].next == Some(node),
            "Contract violation: slot {}.prev.next != self",
            node.slot()
        );
    }
    // INVARIANT: only the sentinels may lack a value
    debug_assert!(
        node == NodeId::HEAD || node == NodeId::TAIL || this.value.is_some(),
        "Contract violation: data node {} holds no value",
        node.slot()
    );
}
