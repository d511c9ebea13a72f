// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Doubly linked, sentinel-bounded list.
//!
//! Nodes live in an arena and refer to each other by `NodeId`. Slot 0 is the
//! head sentinel and slot 1 the tail sentinel; neither ever carries a value.
//! `next` is the forward link that defines the chain; `prev` is the
//! back-reference used to splice in front of a node without a second walk.
//!
//! ```text
//!   HEAD ⇄ n₀ ⇄ n₁ ⇄ … ⇄ nₖ ⇄ TAIL        free: [f₀, f₁, …]
//! ```
//!
//! Removed nodes have both links cleared and their slot pushed on a free list
//! for reuse, so handles into the arena never dangle into live data.

use crate::sequence::{element_index, insert_index, Index, IndexedSequence, SequenceError};
use crate::verify::contracts::check_splice_links;

/// Stable handle into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const HEAD: NodeId = NodeId(0);
    pub const TAIL: NodeId = NodeId(1);

    pub fn slot(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Self {
            value: None,
            next: None,
            prev: None,
        }
    }
}

/// Indexed list over a chain of arena nodes.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    free: Vec<NodeId>,
    size: usize,
    max_len: Option<usize>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Empty list: the two sentinels pointing at each other.
    pub fn new() -> Self {
        let mut head = Node::sentinel();
        let mut tail = Node::sentinel();
        head.next = Some(NodeId::TAIL);
        tail.prev = Some(NodeId::HEAD);
        Self {
            nodes: vec![head, tail],
            free: Vec::new(),
            size: 0,
            max_len: None,
        }
    }

    /// Empty list that refuses to hold more than `max_len` elements.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::new()
        }
    }

    /// Configured length limit, if any.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Walk the chain from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.next_of(NodeId::HEAD),
            remaining: self.size,
        }
    }

    /// Arena slots that are currently released.
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }

    pub(crate) fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub(crate) fn free_list(&self) -> &[NodeId] {
        &self.free
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    /// Node `position` steps past the head's successor.
    ///
    /// `position == size` lands on the tail sentinel.
    fn walk(&self, position: usize) -> NodeId {
        let mut current = self.next_of(NodeId::HEAD).unwrap_or(NodeId::TAIL);
        for _ in 0..position {
            match self.next_of(current) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Obtain a detached node holding `value`, reusing a free slot if possible.
    fn allocate(&mut self, value: T) -> Result<NodeId, SequenceError> {
        let needed = self.size + 1;
        if let Some(limit) = self.max_len {
            if needed > limit {
                return Err(SequenceError::Allocation { requested: needed });
            }
        }

        if let Some(id) = self.free.pop() {
            self.node_mut(id).value = Some(value);
            return Ok(id);
        }

        self.nodes
            .try_reserve(1)
            .map_err(|_| SequenceError::Allocation { requested: needed })?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value: Some(value),
            next: None,
            prev: None,
        });
        Ok(id)
    }

    /// Return a node's slot to the free list. Its links must already be cleared.
    fn release(&mut self, id: NodeId) {
        debug_assert!(id != NodeId::HEAD && id != NodeId::TAIL);
        self.free.push(id);
    }

    /// Link `node` immediately before `successor`.
    fn splice_before(&mut self, node: NodeId, successor: NodeId) {
        let predecessor = self.node(successor).prev.unwrap_or(NodeId::HEAD);

        {
            let n = self.node_mut(node);
            n.prev = Some(predecessor);
            n.next = Some(successor);
        }
        self.node_mut(predecessor).next = Some(node);
        self.node_mut(successor).prev = Some(node);

        check_splice_links(&self.nodes, node);
    }

    /// Bypass `node` and clear its own links.
    fn unlink(&mut self, node: NodeId) {
        let (prev, next) = {
            let n = self.node_mut(node);
            (n.prev.take(), n.next.take())
        };
        if let Some(p) = prev {
            self.node_mut(p).next = next;
        }
        if let Some(s) = next {
            self.node_mut(s).prev = prev;
        }
        if let Some(p) = prev {
            check_splice_links(&self.nodes, p);
        }
    }
}

impl<T> IndexedSequence<T> for LinkedList<T> {
    fn add(&mut self, index: Index, value: T) -> Result<(), SequenceError> {
        let at = insert_index(index, self.size)?;
        let successor = self.walk(at);
        let node = self.allocate(value)?;
        self.splice_before(node, successor);
        self.size += 1;
        Ok(())
    }

    fn get(&self, index: Index) -> Result<&T, SequenceError> {
        let at = element_index(index, self.size)?;
        let node = self.walk(at);
        self.node(node)
            .value
            .as_ref()
            .ok_or(SequenceError::Index { index, size: self.size })
    }

    fn set(&mut self, index: Index, value: T) -> Result<T, SequenceError> {
        let at = element_index(index, self.size)?;
        let size = self.size;
        let node = self.walk(at);
        self.node_mut(node)
            .value
            .replace(value)
            .ok_or(SequenceError::Index { index, size })
    }

    fn remove(&mut self, index: Index) -> Result<T, SequenceError> {
        let at = element_index(index, self.size)?;
        let size = self.size;
        let node = self.walk(at);
        let value = self
            .node_mut(node)
            .value
            .take()
            .ok_or(SequenceError::Index { index, size })?;
        self.unlink(node);
        self.release(node);
        self.size -= 1;
        Ok(value)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn name(&self) -> &'static str {
        "linked-list"
    }

    fn contents(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Forward iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        let node = self.list.node(id);
        self.cursor = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
