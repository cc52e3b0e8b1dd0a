// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn batch(commands: &[&str]) -> Batch {
    commands.iter().map(|c| c.to_string()).collect()
}

#[test]
fn writes_json_lines() {
    let mut formatter = JsonFormatter::new(Vec::new());
    formatter.write_batch(&batch(&["cmd1", "cmd2"])).unwrap();
    formatter.write_batch(&batch(&["cmd3"])).unwrap();

    let out = String::from_utf8(formatter.into_inner()).unwrap();
    assert_eq!(out, "{\"bulk\":[\"cmd1\",\"cmd2\"]}\n{\"bulk\":[\"cmd3\"]}\n");
}

#[test]
fn escapes_special_characters() {
    let mut formatter = JsonFormatter::new(Vec::new());
    formatter.write_batch(&batch(&["say \"hi\"\t"])).unwrap();

    let out = String::from_utf8(formatter.into_inner()).unwrap();
    let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(value["bulk"][0], "say \"hi\"\t");
}
