// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn config_error_display() {
    let err = Error::Config {
        message: "invalid version".into(),
        path: Some(PathBuf::from("cmdframe.toml")),
    };
    assert!(err.to_string().contains("invalid version"));
}

#[test]
fn duplicate_sequence_display_escapes_control_symbols() {
    let err = Error::DuplicateSequence {
        sequence: "\r\n".into(),
    };
    assert_eq!(err.to_string(), r#"sequence "\r\n" is already registered"#);
}

#[test]
fn duplicate_pair_display_names_opening() {
    let err = Error::DuplicatePair { opening: '{' };
    assert!(err.to_string().contains("'{'"));
}

#[test]
fn exit_code_from_internal_error() {
    let err = Error::Internal("bug".into());
    assert_eq!(ExitCode::from(&err), ExitCode::InternalError);
}

#[parameterized(
    empty_sequence = { Error::EmptySequence, ExitCode::ConfigError },
    duplicate_sequence = { Error::DuplicateSequence { sequence: "x".into() }, ExitCode::ConfigError },
    duplicate_pair = { Error::DuplicatePair { opening: '(' }, ExitCode::ConfigError },
    config = { Error::Config { message: "x".into(), path: None }, ExitCode::ConfigError },
    argument = { Error::Argument("x".into()), ExitCode::ConfigError },
    internal = { Error::Internal("x".into()), ExitCode::InternalError },
)]
fn exit_code_mapping(err: Error, expected: ExitCode) {
    assert_eq!(ExitCode::from(&err), expected);
}
