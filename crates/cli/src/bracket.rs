// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-symbol bracket pair tracker.
//!
//! The tracker reports raw open and close events only. It does NOT track
//! nesting depth on behalf of callbacks: when several instances of the same
//! pair are open, one closing symbol produces a single close event and pops
//! a single instance. A callback that cares about nesting keeps its own
//! counter.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Direction of a bracket event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketEvent {
    Open,
    Close,
}

impl BracketEvent {
    pub fn is_opening(self) -> bool {
        self == BracketEvent::Open
    }
}

/// Callback fired on open and close events. Receives the pending text.
pub type BracketCallback = Box<dyn FnMut(&str, BracketEvent)>;

/// What a single character did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketOutcome {
    Idle,
    /// At least one open pair was closed.
    Closed,
    /// The character opened a pair.
    Opened,
}

impl BracketOutcome {
    pub fn fired(self) -> bool {
        self != BracketOutcome::Idle
    }
}

struct BracketRule {
    closing: char,
    callback: BracketCallback,
}

#[derive(Default)]
pub struct BracketTracker {
    rules: HashMap<char, BracketRule>,
    /// Opening symbol of every open instance, oldest first.
    open: Vec<char>,
}

impl BracketTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pair. Each opening symbol may be registered once.
    pub fn register(&mut self, opening: char, closing: char, callback: BracketCallback) -> Result<()> {
        if self.rules.contains_key(&opening) {
            return Err(Error::DuplicatePair { opening });
        }
        self.rules.insert(opening, BracketRule { closing, callback });
        tracing::debug!("registered bracket pair {:?} {:?}", opening, closing);
        Ok(())
    }

    pub fn feed(&mut self, c: char, text: &str) -> BracketOutcome {
        let closed = self.close_matching(c, text);

        if let Some(rule) = self.rules.get_mut(&c) {
            self.open.push(c);
            tracing::trace!("bracket {:?} opened, {} open", c, self.open.len());
            (rule.callback)(text, BracketEvent::Open);
            return BracketOutcome::Opened;
        }

        if closed {
            BracketOutcome::Closed
        } else {
            BracketOutcome::Idle
        }
    }

    /// Number of currently open instances.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Forget every open instance. Registrations are kept.
    pub fn reset(&mut self) {
        self.open.clear();
    }

    /// Fire one close event per distinct rule closed by `c`.
    fn close_matching(&mut self, c: char, text: &str) -> bool {
        let mut matched: Vec<char> = Vec::new();
        for &opening in &self.open {
            let closes = self.rules.get(&opening).is_some_and(|rule| rule.closing == c);
            if closes && !matched.contains(&opening) {
                matched.push(opening);
            }
        }

        for opening in &matched {
            if let Some(rule) = self.rules.get_mut(opening) {
                (rule.callback)(text, BracketEvent::Close);
            }
            if let Some(pos) = self.open.iter().rposition(|o| o == opening) {
                self.open.remove(pos);
            }
            tracing::trace!("bracket {:?} closed by {:?}, {} open", opening, c, self.open.len());
        }

        !matched.is_empty()
    }
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod tests;
