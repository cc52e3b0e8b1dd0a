// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stream dispatcher.
//!
//! Drives the sequence matcher and the bracket tracker one character at a
//! time and owns the pending text handed to their callbacks.
//!
//! Text rules:
//! - Callbacks borrow the pending text. After a subsystem fires, the
//!   dispatcher clears it, so each firing sees only what arrived since the
//!   previous one.
//! - Characters that belong to an unfinished sequence are held back. If the
//!   sequence completes they are dropped as part of the terminator; if it is
//!   abandoned they are released into the pending text in stream order.
//! - When a sequence completes, held characters in front of it (left over
//!   from a longer candidate) are released first, so its callback sees them.
//! - A held character that also fired a bracket event is claimed: it still
//!   counts toward the in-flight candidate but is never released as text.
//! - Callbacks cannot feed the dispatcher that invoked them: `feed` holds
//!   `&mut self` for the duration of the call.

use crate::bracket::{BracketCallback, BracketOutcome, BracketTracker};
use crate::error::Result;
use crate::sequence::{MatchOutcome, SequenceCallback, SequenceMatcher};

#[derive(Default)]
pub struct Dispatcher {
    sequences: SequenceMatcher,
    brackets: BracketTracker,
    buffer: String,
    held: Vec<Held>,
}

#[derive(Debug, Clone, Copy)]
struct Held {
    symbol: char,
    claimed: bool,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`SequenceMatcher::register`].
    pub fn register_sequence(&mut self, symbols: &str, callback: SequenceCallback) -> Result<()> {
        self.sequences.register(symbols, callback)
    }

    /// See [`SequenceMatcher::remove`].
    pub fn remove_sequence(&mut self, symbols: &str) -> Option<SequenceCallback> {
        self.sequences.remove(symbols)
    }

    /// See [`BracketTracker::register`].
    pub fn register_pair(&mut self, opening: char, closing: char, callback: BracketCallback) -> Result<()> {
        self.brackets.register(opening, closing, callback)
    }

    /// Process one character. Returns true if any callback ran.
    pub fn feed(&mut self, c: char) -> bool {
        if let Some(depth) = self.sequences.completion_depth(c) {
            // `c` plus `depth - 1` held characters form the terminator.
            self.release_beyond(depth - 1);
        }

        let matched = self.sequences.feed(c, &self.buffer);
        match matched {
            MatchOutcome::Fired => {
                self.buffer.clear();
                self.held.clear();
            }
            MatchOutcome::Pending => {
                self.held.push(Held {
                    symbol: c,
                    claimed: false,
                });
                self.release_held();
            }
            MatchOutcome::Idle => self.release_held(),
        }

        let bracketed = self.brackets.feed(c, &self.buffer);
        if bracketed.fired() {
            self.buffer.clear();
            if matched == MatchOutcome::Pending
                && let Some(last) = self.held.last_mut()
            {
                last.claimed = true;
            }
            return true;
        }

        if matched == MatchOutcome::Idle {
            self.buffer.push(c);
        }
        matched.fired()
    }

    /// Feed every character of `input`. Returns how many of them fired.
    pub fn feed_str(&mut self, input: &str) -> usize {
        input.chars().filter(|&c| self.feed(c)).count()
    }

    /// Text accumulated since the last firing.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// End of stream: release held characters and take the pending text.
    pub fn finish(&mut self) -> String {
        self.sequences.reset();
        self.release_beyond(0);
        std::mem::take(&mut self.buffer)
    }

    /// Drop all in-flight state and text. Registrations are kept.
    pub fn reset(&mut self) {
        self.sequences.reset();
        self.brackets.reset();
        self.buffer.clear();
        self.held.clear();
    }

    /// Number of open bracket instances.
    pub fn open_brackets(&self) -> usize {
        self.brackets.open_len()
    }

    /// Move held characters no candidate still covers into the buffer.
    fn release_held(&mut self) {
        self.release_beyond(self.sequences.pending_depth());
    }

    /// Release all but the last `keep` held characters, oldest first.
    /// Claimed characters are dropped instead.
    fn release_beyond(&mut self, keep: usize) {
        let Some(excess) = self.held.len().checked_sub(keep).filter(|&n| n > 0) else {
            return;
        };
        for held in self.held.drain(..excess) {
            if !held.claimed {
                self.buffer.push(held.symbol);
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
