//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the cmdframe binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::path::Path;
use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the cmdframe binary in isolation
/// from the caller's environment.
pub fn cmdframe_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cmdframe"));
    cmd.env_remove("CMDFRAME_CONFIG")
        .env_remove("CMDFRAME_LOG")
        .env_remove("COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// Temp project rooted at a `.git` marker so config discovery stays inside it.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Temp project with a cmdframe.toml.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = temp_project();
    std::fs::write(dir.path().join("cmdframe.toml"), config).unwrap();
    dir
}

/// Run `cmdframe bulk <args>` in `dir`, feeding `stdin`.
pub fn bulk(dir: &Path, args: &[&str], stdin: &str) -> assert_cmd::assert::Assert {
    cmdframe_cmd()
        .arg("bulk")
        .args(args)
        .current_dir(dir)
        .write_stdin(stdin)
        .assert()
}
