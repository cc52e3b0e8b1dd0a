// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sparse occupancy trie.
//!
//! Maps symbol sequences to terminal values. Every node knows how many
//! values are stored anywhere in its subtree (its *live count*), so a
//! matcher can ask "can anything still complete below here?" in O(1).
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Nodes are never
//! freed: clearing the last value of a branch leaves it allocated with a
//! live count of zero, so a `NodeId` handed out once stays valid for the
//! lifetime of the trie.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Index of a node inside a [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    fn idx(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node<V> {
    value: Option<V>,
    children: HashMap<char, NodeId>,
    parent: Option<NodeId>,
    depth: usize,
    live: usize,
}

impl<V> Node<V> {
    fn new(parent: Option<NodeId>, depth: usize) -> Self {
        Self {
            value: None,
            children: HashMap::new(),
            parent,
            depth,
            live: 0,
        }
    }
}

/// Lazily built trie keyed by `char`.
#[derive(Debug)]
pub struct Trie<V> {
    nodes: Vec<Node<V>>,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    /// Create a trie holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(None, 0)],
        }
    }

    /// The root node. It represents the empty prefix and never holds a value
    /// reachable through [`Trie::get_or_create_value_slot`].
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up the child of `id` for `symbol` without creating it.
    pub fn child(&self, id: NodeId, symbol: char) -> Option<NodeId> {
        self.nodes[id.idx()].children.get(&symbol).copied()
    }

    /// Return the child of `id` for `symbol`, creating an empty one if absent.
    pub fn get_or_create_child(&mut self, id: NodeId, symbol: char) -> NodeId {
        if let Some(child) = self.child(id, symbol) {
            return child;
        }

        let child = NodeId(self.nodes.len());
        let depth = self.nodes[id.idx()].depth + 1;
        self.nodes.push(Node::new(Some(id), depth));
        self.nodes[id.idx()].children.insert(symbol, child);
        child
    }

    /// Return the terminal value slot for `symbol` under `id`.
    ///
    /// The slot of a symbol is the value of its child node, so this is the
    /// same node as [`Trie::get_or_create_child`]; the separate name keeps
    /// call sites honest about whether they descend or terminate.
    pub fn get_or_create_value_slot(&mut self, id: NodeId, symbol: char) -> NodeId {
        self.get_or_create_child(id, symbol)
    }

    /// Store `value` at `slot`, returning the previous value.
    ///
    /// Live counts change only on an empty to present transition; replacing
    /// an existing value leaves every count untouched.
    pub fn set(&mut self, slot: NodeId, value: V) -> Option<V> {
        let previous = self.nodes[slot.idx()].value.replace(value);
        if previous.is_none() {
            self.propagate_added(slot);
        }
        previous
    }

    /// Remove and return the value at `slot`.
    pub fn clear(&mut self, slot: NodeId) -> Option<V> {
        let previous = self.nodes[slot.idx()].value.take();
        if previous.is_some() {
            self.propagate_removed(slot);
        }
        previous
    }

    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.nodes[id.idx()].value.as_ref()
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.nodes[id.idx()].value.as_mut()
    }

    /// Number of values stored in the subtree rooted at `id`, itself included.
    pub fn size(&self, id: NodeId) -> usize {
        self.nodes[id.idx()].live
    }

    /// Number of symbols on the path from the root to `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id.idx()].depth
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow `symbols` from the root without creating anything.
    pub fn find(&self, symbols: &str) -> Option<NodeId> {
        symbols
            .chars()
            .try_fold(self.root(), |id, symbol| self.child(id, symbol))
    }

    /// Recount every subtree and compare against the stored live counts.
    pub fn check_invariants(&self) -> Result<()> {
        let mut counted = vec![0usize; self.nodes.len()];

        // Children are always allocated after their parent, so a reverse
        // sweep sees every child before the parent that sums it.
        for idx in (0..self.nodes.len()).rev() {
            let node = &self.nodes[idx];
            let own = usize::from(node.value.is_some());
            let below: usize = node.children.values().map(|c| counted[c.idx()]).sum();
            counted[idx] = own + below;

            if counted[idx] != node.live {
                return Err(Error::Internal(format!(
                    "live count mismatch at node {}: stored {}, counted {}",
                    idx, node.live, counted[idx]
                )));
            }
        }
        Ok(())
    }

    fn propagate_added(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = &mut self.nodes[id.idx()];
            node.live += 1;
            current = node.parent;
        }
    }

    fn propagate_removed(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = &mut self.nodes[id.idx()];
            assert!(node.live > 0, "live count underflow at {:?}", id);
            node.live -= 1;
            current = node.parent;
        }
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
