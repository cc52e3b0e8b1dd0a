// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command batching on top of the dispatcher.
//!
//! Commands end with the configured terminator. Outside blocks they are
//! emitted in static batches of `size` commands, or earlier when an empty
//! line arrives. A block pair starts a dynamic batch that ignores the size
//! limit and is emitted when the outermost block closes. Nested blocks are
//! merged into the outermost one; the nesting depth is tracked here, not by
//! the dispatcher.

use std::cell::RefCell;
use std::rc::Rc;

use crate::bracket::BracketEvent;
use crate::dispatcher::Dispatcher;
use crate::error::Result;

/// A group of commands emitted together.
pub type Batch = Vec<String>;

/// Batching parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSettings {
    /// Static batch size.
    pub size: usize,
    /// Sequence that ends a command.
    pub terminator: String,
    /// Block `(open, close)` pairs.
    pub blocks: Vec<(char, char)>,
}

impl Default for BulkSettings {
    fn default() -> Self {
        Self {
            size: 3,
            terminator: "\n".to_string(),
            blocks: vec![('{', '}')],
        }
    }
}

#[derive(Debug, Default)]
struct BatchState {
    size: usize,
    depth: usize,
    pending: Batch,
    ready: Vec<Batch>,
}

impl BatchState {
    fn emit(&mut self) {
        if !self.pending.is_empty() {
            let batch = std::mem::take(&mut self.pending);
            tracing::debug!("emitting batch of {} commands", batch.len());
            self.ready.push(batch);
        }
    }

    fn on_line(&mut self, text: &str) {
        if text.is_empty() {
            if self.depth == 0 {
                self.emit();
            }
            return;
        }

        self.pending.push(text.to_string());
        if self.depth == 0 && self.pending.len() >= self.size {
            self.emit();
        }
    }

    fn on_block(&mut self, text: &str, event: BracketEvent) {
        match event {
            BracketEvent::Open => {
                // Text before the opening belongs to the enclosing batch.
                if !text.is_empty() {
                    self.pending.push(text.to_string());
                }
                if self.depth == 0 {
                    self.emit();
                }
                self.depth += 1;
            }
            BracketEvent::Close => {
                if self.depth == 0 {
                    tracing::debug!("ignoring block close outside any block");
                    return;
                }
                if !text.is_empty() {
                    self.pending.push(text.to_string());
                }
                self.depth -= 1;
                if self.depth == 0 {
                    self.emit();
                }
            }
        }
    }
}

/// Streams characters through a [`Dispatcher`] and collects batches.
pub struct BulkBatcher {
    dispatcher: Dispatcher,
    state: Rc<RefCell<BatchState>>,
}

impl BulkBatcher {
    pub fn new(settings: &BulkSettings) -> Result<Self> {
        let state = Rc::new(RefCell::new(BatchState {
            size: settings.size.max(1),
            ..BatchState::default()
        }));
        let mut dispatcher = Dispatcher::new();

        let lines = Rc::clone(&state);
        dispatcher.register_sequence(
            &settings.terminator,
            Box::new(move |text: &str| lines.borrow_mut().on_line(text)),
        )?;

        for &(open, close) in &settings.blocks {
            let blocks = Rc::clone(&state);
            dispatcher.register_pair(
                open,
                close,
                Box::new(move |text: &str, event: BracketEvent| {
                    blocks.borrow_mut().on_block(text, event)
                }),
            )?;
        }

        Ok(Self { dispatcher, state })
    }

    pub fn feed(&mut self, c: char) {
        self.dispatcher.feed(c);
    }

    pub fn feed_str(&mut self, input: &str) {
        self.dispatcher.feed_str(input);
    }

    /// Take every batch completed so far.
    pub fn drain(&mut self) -> Vec<Batch> {
        std::mem::take(&mut self.state.borrow_mut().ready)
    }

    /// End of input. Trailing text counts as a command, a partial static
    /// batch is emitted and an unterminated block is discarded.
    pub fn finish(&mut self) -> Vec<Batch> {
        let tail = self.dispatcher.finish();
        {
            let mut state = self.state.borrow_mut();
            if !tail.is_empty() {
                state.on_line(&tail);
            }
            if state.depth > 0 {
                tracing::debug!(
                    "discarding unterminated block with {} commands",
                    state.pending.len()
                );
                state.pending.clear();
                state.depth = 0;
            } else {
                state.emit();
            }
        }
        self.dispatcher.reset();
        self.drain()
    }
}

#[cfg(test)]
#[path = "bulk_tests.rs"]
mod tests;
