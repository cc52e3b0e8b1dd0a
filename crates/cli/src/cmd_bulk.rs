// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bulk command implementation.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use termcolor::StandardStream;

use cmdframe::bulk::BulkBatcher;
use cmdframe::cli::{BulkArgs, Cli, OutputFormat};
use cmdframe::color::ColorMode;
use cmdframe::config;
use cmdframe::error::{Error, ExitCode};
use cmdframe::output::BatchWriter;
use cmdframe::output::json::JsonFormatter;
use cmdframe::output::text::TextFormatter;

/// Run the bulk command.
pub fn run(cli: &Cli, args: &BulkArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let mut settings = config.bulk_settings();
    if let Some(size) = args.size {
        if size == 0 {
            return Err(Error::Argument("--size must be at least 1".to_string()).into());
        }
        settings.size = size;
    }
    tracing::debug!(
        "bulk size {}, terminator {:?}, {} block pairs",
        settings.size,
        settings.terminator,
        settings.blocks.len()
    );

    let batcher = BulkBatcher::new(&settings)?;
    let input = open_input(args.input_path().map(|p| p.as_path()))?;

    match args.output {
        OutputFormat::Text => {
            let choice = ColorMode::from_flags(args.color, args.no_color).resolve();
            let mut writer = TextFormatter::new(StandardStream::stdout(choice));
            stream(input, batcher, &mut writer)?;
        }
        OutputFormat::Json => {
            let mut writer = JsonFormatter::new(io::stdout().lock());
            stream(input, batcher, &mut writer)?;
        }
    }

    Ok(ExitCode::Success)
}

fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Feed input line by line, writing batches as soon as they complete.
fn stream(
    mut input: impl BufRead,
    mut batcher: BulkBatcher,
    writer: &mut impl BatchWriter,
) -> anyhow::Result<()> {
    let mut line = Vec::new();
    let mut written = 0usize;

    while input.read_until(b'\n', &mut line)? > 0 {
        batcher.feed_str(&String::from_utf8_lossy(&line));
        line.clear();
        for batch in batcher.drain() {
            writer.write_batch(&batch)?;
            written += 1;
        }
    }
    for batch in batcher.finish() {
        writer.write_batch(&batch)?;
        written += 1;
    }

    tracing::debug!("wrote {} batches", written);
    Ok(())
}
