//! Incremental matching of terminating sequences and bracket pairs over a
//! character stream.
//!
//! The engine is [`Dispatcher`]: register sequences and bracket pairs with
//! callbacks, then [`Dispatcher::feed`] one character at a time. Everything
//! else in the crate is a client of it.

pub mod bracket;
pub mod bulk;
pub mod cli;
pub mod color;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod output;
pub mod sequence;
pub mod trie;

pub use bracket::{BracketCallback, BracketEvent, BracketOutcome, BracketTracker};
pub use bulk::{Batch, BulkBatcher, BulkSettings};
pub use dispatcher::Dispatcher;
pub use error::{Error, ExitCode, Result};
pub use sequence::{MatchOutcome, SequenceCallback, SequenceMatcher};
pub use trie::{NodeId, Trie};
