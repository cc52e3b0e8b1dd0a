//! Output formatting for emitted batches.

pub mod json;
pub mod text;

use crate::bulk::Batch;

/// Sink for batches as they are emitted.
pub trait BatchWriter {
    fn write_batch(&mut self, batch: &Batch) -> std::io::Result<()>;
}
