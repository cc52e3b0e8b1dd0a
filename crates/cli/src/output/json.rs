// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! Streams one JSON object per batch (JSON Lines):
//! ```text
//! {"bulk":["cmd1","cmd2"]}
//! ```

use std::io::Write;

use serde::Serialize;

use super::BatchWriter;
use crate::bulk::Batch;

/// A batch as serialized to JSON.
#[derive(Debug, Serialize)]
pub struct BatchOutput<'a> {
    pub bulk: &'a [String],
}

pub struct JsonFormatter<W> {
    out: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BatchWriter for JsonFormatter<W> {
    fn write_batch(&mut self, batch: &Batch) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, &BatchOutput { bulk: batch })?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
