// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminating sequence matcher.
//!
//! Registered sequences share a [`Trie`]. A set of cursors tracks every
//! in-flight partial match; each character advances, completes or drops
//! them without rescanning earlier input.

use crate::error::{Error, Result};
use crate::trie::{NodeId, Trie};

/// Callback fired when a sequence completes. Receives the pending text.
pub type SequenceCallback = Box<dyn FnMut(&str)>;

/// What a single character did to the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No sequence involves the character.
    Idle,
    /// Nothing completed, but at least one candidate is still alive.
    Pending,
    /// At least one callback ran.
    Fired,
}

impl MatchOutcome {
    pub fn fired(self) -> bool {
        self == MatchOutcome::Fired
    }
}

#[derive(Default)]
pub struct SequenceMatcher {
    trie: Trie<SequenceCallback>,
    /// Cursors in the order they became active.
    active: Vec<NodeId>,
}

impl SequenceMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to fire whenever `symbols` has been seen in order.
    ///
    /// Rejects empty sequences and sequences that already have a callback.
    pub fn register(&mut self, symbols: &str, callback: SequenceCallback) -> Result<()> {
        let mut chars: Vec<char> = symbols.chars().collect();
        let last = chars.pop().ok_or(Error::EmptySequence)?;

        if let Some(existing) = self.trie.find(symbols)
            && self.trie.value(existing).is_some()
        {
            return Err(Error::DuplicateSequence {
                sequence: symbols.to_string(),
            });
        }

        let mut node = self.trie.root();
        for c in chars {
            node = self.trie.get_or_create_child(node, c);
        }
        let slot = self.trie.get_or_create_value_slot(node, last);
        self.trie.set(slot, callback);

        tracing::debug!("registered sequence {:?}", symbols);
        Ok(())
    }

    /// Unregister `symbols`, returning its callback.
    ///
    /// Cursors already inside the branch are dropped on the next character
    /// once nothing below them can complete.
    pub fn remove(&mut self, symbols: &str) -> Option<SequenceCallback> {
        let slot = self.trie.find(symbols)?;
        if slot == self.trie.root() {
            return None;
        }
        let removed = self.trie.clear(slot);
        if removed.is_some() {
            tracing::debug!("removed sequence {:?}", symbols);
        }
        removed
    }

    /// Advance every candidate by `c`, firing completed sequences with `text`.
    pub fn feed(&mut self, c: char, text: &str) -> MatchOutcome {
        let root = self.trie.root();
        let start = self.trie.child(root, c);
        let mut fired = false;

        // One-symbol sequences complete immediately.
        if let Some(node) = start
            && let Some(callback) = self.trie.value_mut(node)
        {
            tracing::trace!("sequence completed at depth 1");
            callback(text);
            fired = true;
        }

        for i in 0..self.active.len() {
            let Some(next) = self.trie.child(self.active[i], c) else {
                continue;
            };
            let depth = self.trie.depth(next);
            if let Some(callback) = self.trie.value_mut(next) {
                tracing::trace!("sequence completed at depth {}", depth);
                callback(text);
                fired = true;
            }
        }

        let trie = &self.trie;
        let mut advanced: Vec<NodeId> = self
            .active
            .iter()
            .filter_map(|&cursor| trie.child(cursor, c))
            .filter(|&next| trie.size(next) > 0)
            .collect();

        if let Some(node) = start
            && trie.size(node) > 0
        {
            advanced.push(node);
        }
        self.active = advanced;

        if fired {
            MatchOutcome::Fired
        } else if self.active.is_empty() {
            MatchOutcome::Idle
        } else {
            MatchOutcome::Pending
        }
    }

    /// Depth of the longest sequence that `c` would complete, without
    /// advancing anything.
    pub fn completion_depth(&self, c: char) -> Option<usize> {
        let root = self.trie.root();
        let from_root = self
            .trie
            .child(root, c)
            .filter(|&node| self.trie.value(node).is_some());

        self.active
            .iter()
            .filter_map(|&cursor| self.trie.child(cursor, c))
            .filter(|&next| self.trie.value(next).is_some())
            .chain(from_root)
            .map(|node| self.trie.depth(node))
            .max()
    }

    /// Number of in-flight cursors.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Longest in-flight partial match, in symbols.
    pub fn pending_depth(&self) -> usize {
        self.active
            .iter()
            .map(|&cursor| self.trie.depth(cursor))
            .max()
            .unwrap_or(0)
    }

    /// Drop every in-flight cursor. Registrations are kept.
    pub fn reset(&mut self) {
        self.active.clear();
    }

    #[cfg(test)]
    pub(crate) fn trie(&self) -> &Trie<SequenceCallback> {
        &self.trie
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
