// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per batch:
//! ```text
//! bulk: cmd1, cmd2, cmd3
//! ```

use std::io::Write;
use termcolor::WriteColor;

use super::BatchWriter;
use crate::bulk::Batch;
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W> {
    out: W,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> BatchWriter for TextFormatter<W> {
    fn write_batch(&mut self, batch: &Batch) -> std::io::Result<()> {
        self.out.set_color(&scheme::label())?;
        write!(self.out, "bulk:")?;
        self.out.reset()?;

        for (i, command) in batch.iter().enumerate() {
            if i > 0 {
                self.out.set_color(&scheme::separator())?;
                write!(self.out, ",")?;
                self.out.reset()?;
            }
            write!(self.out, " {}", command)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
