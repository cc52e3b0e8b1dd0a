// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use similar_asserts::assert_eq;
use termcolor::{Ansi, NoColor};

fn batch(commands: &[&str]) -> Batch {
    commands.iter().map(|c| c.to_string()).collect()
}

fn render(batches: &[Batch]) -> String {
    let mut formatter = TextFormatter::new(NoColor::new(Vec::new()));
    for b in batches {
        formatter.write_batch(b).unwrap();
    }
    String::from_utf8(formatter.into_inner().into_inner()).unwrap()
}

#[test]
fn writes_one_line_per_batch() {
    let out = render(&[batch(&["cmd1", "cmd2", "cmd3"]), batch(&["cmd4"])]);
    assert_eq!(out, "bulk: cmd1, cmd2, cmd3\nbulk: cmd4\n");
}

#[test]
fn commands_are_written_verbatim() {
    let out = render(&[batch(&["echo a, b"])]);
    assert_eq!(out, "bulk: echo a, b\n");
}

#[test]
fn colored_output_wraps_label() {
    let mut formatter = TextFormatter::new(Ansi::new(Vec::new()));
    formatter.write_batch(&batch(&["a", "b"])).unwrap();
    let out = String::from_utf8(formatter.into_inner().into_inner()).unwrap();

    assert!(out.contains("\x1b["));
    assert!(out.contains("bulk:"));
    assert!(out.ends_with(" b\n"));
}
