// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-structure validators for the two list implementations.
//!
//! | Validator             | What's Guaranteed on `Ok`                           |
//! |-----------------------|-----------------------------------------------------|
//! | `validate_array_list` | slots `[0, size)` occupied, rest empty, size ≤ cap  |
//! | `validate_linked_list`| chain head→tail has `size` data nodes, links mirror |
//!
//! Validators never panic. They report the first violation they find.

use crate::array_list::ArrayList;
use crate::linked_list::{LinkedList, NodeId};
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// More elements than allocated slots.
    SizeExceedsCapacity { size: usize, capacity: usize },
    /// A slot inside `[0, size)` holds no value.
    EmptyOccupiedSlot { position: usize },
    /// A slot at or past `size` still holds a value.
    StaleSpareSlot { position: usize },
    /// Capacity is neither zero nor a power of two reachable by doubling.
    IrregularCapacity { capacity: usize },
    /// A sentinel carries a value or has the wrong outer link.
    CorruptSentinel { slot: usize },
    /// A data node carries no value.
    EmptyDataNode { slot: usize },
    /// `node.next.prev != node`.
    BrokenBackLink { slot: usize },
    /// The forward chain ended before reaching the tail sentinel.
    TruncatedChain { reached: usize },
    /// The forward chain visits more nodes than the arena holds.
    CyclicChain { slot: usize },
    /// Number of data nodes on the chain disagrees with the size counter.
    SizeMismatch { claimed: usize, actual: usize },
    /// A released slot still has links or a value.
    DirtyFreeSlot { slot: usize },
    /// Live nodes plus free slots don't cover the arena.
    LeakedSlots { arena: usize, accounted: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::SizeExceedsCapacity { size, capacity } => {
                write!(f, "size {} > capacity {}", size, capacity)
            }
            InvariantError::EmptyOccupiedSlot { position } => {
                write!(f, "slot {} inside the occupied prefix is empty", position)
            }
            InvariantError::StaleSpareSlot { position } => {
                write!(f, "spare slot {} still holds a value", position)
            }
            InvariantError::IrregularCapacity { capacity } => {
                write!(f, "capacity {} is not reachable by doubling from 2", capacity)
            }
            InvariantError::CorruptSentinel { slot } => {
                write!(f, "sentinel at slot {} is corrupt", slot)
            }
            InvariantError::EmptyDataNode { slot } => {
                write!(f, "data node at slot {} holds no value", slot)
            }
            InvariantError::BrokenBackLink { slot } => {
                write!(f, "successor of slot {} does not point back to it", slot)
            }
            InvariantError::TruncatedChain { reached } => {
                write!(f, "chain ended after {} nodes without reaching tail", reached)
            }
            InvariantError::CyclicChain { slot } => {
                write!(f, "chain revisits slot {}", slot)
            }
            InvariantError::SizeMismatch { claimed, actual } => {
                write!(f, "size counter {} but chain holds {} nodes", claimed, actual)
            }
            InvariantError::DirtyFreeSlot { slot } => {
                write!(f, "free slot {} still has links or a value", slot)
            }
            InvariantError::LeakedSlots { arena, accounted } => {
                write!(
                    f,
                    "arena has {} slots but only {} are live or free",
                    arena, accounted
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check every structural invariant of an [`ArrayList`].
pub fn validate_array_list<T>(list: &ArrayList<T>) -> Result<(), InvariantError> {
    let slots = list.slots();
    let size = crate::IndexedSequence::size(list);
    let capacity = slots.len();

    if size > capacity {
        return Err(InvariantError::SizeExceedsCapacity { size, capacity });
    }
    if capacity != 0 && (capacity < 2 || !capacity.is_power_of_two()) {
        return Err(InvariantError::IrregularCapacity { capacity });
    }
    if let Some(position) = slots[..size].iter().position(Option::is_none) {
        return Err(InvariantError::EmptyOccupiedSlot { position });
    }
    if let Some(offset) = slots[size..].iter().position(Option::is_some) {
        return Err(InvariantError::StaleSpareSlot {
            position: size + offset,
        });
    }
    Ok(())
}

/// Check every structural invariant of a [`LinkedList`].
pub fn validate_linked_list<T>(list: &LinkedList<T>) -> Result<(), InvariantError> {
    let nodes = list.nodes();
    let head = &nodes[NodeId::HEAD.slot()];
    let tail = &nodes[NodeId::TAIL.slot()];

    if head.value.is_some() || head.prev.is_some() {
        return Err(InvariantError::CorruptSentinel {
            slot: NodeId::HEAD.slot(),
        });
    }
    if tail.value.is_some() || tail.next.is_some() {
        return Err(InvariantError::CorruptSentinel {
            slot: NodeId::TAIL.slot(),
        });
    }

    let mut visited = vec![false; nodes.len()];
    visited[NodeId::HEAD.slot()] = true;
    let mut current = NodeId::HEAD;
    let mut data_nodes = 0usize;

    loop {
        let Some(next) = nodes[current.slot()].next else {
            return Err(InvariantError::TruncatedChain {
                reached: data_nodes,
            });
        };
        if nodes[next.slot()].prev != Some(current) {
            return Err(InvariantError::BrokenBackLink {
                slot: current.slot(),
            });
        }
        if next == NodeId::TAIL {
            break;
        }
        if visited[next.slot()] {
            return Err(InvariantError::CyclicChain { slot: next.slot() });
        }
        visited[next.slot()] = true;
        if nodes[next.slot()].value.is_none() {
            return Err(InvariantError::EmptyDataNode { slot: next.slot() });
        }
        data_nodes += 1;
        current = next;
    }

    let claimed = crate::IndexedSequence::size(list);
    if data_nodes != claimed {
        return Err(InvariantError::SizeMismatch {
            claimed,
            actual: data_nodes,
        });
    }

    for &free in list.free_list() {
        let node = &nodes[free.slot()];
        if node.value.is_some() || node.next.is_some() || node.prev.is_some() {
            return Err(InvariantError::DirtyFreeSlot { slot: free.slot() });
        }
    }

    let accounted = 2 + data_nodes + list.free_list().len();
    if accounted != nodes.len() {
        return Err(InvariantError::LeakedSlots {
            arena: nodes.len(),
            accounted,
        });
    }
    Ok(())
}
