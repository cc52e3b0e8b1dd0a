// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// cmdframe error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A sequence must contain at least one symbol.
    #[error("cannot register an empty sequence")]
    EmptySequence,

    /// The sequence already has a callback.
    #[error("sequence {sequence:?} is already registered")]
    DuplicateSequence { sequence: String },

    /// The opening symbol already has a bracket rule.
    #[error("bracket pair opening with {opening:?} is already registered")]
    DuplicatePair { opening: char },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using cmdframe Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Input processed
    Success = 0,
    /// Configuration, registration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::EmptySequence | Error::DuplicateSequence { .. } | Error::DuplicatePair { .. } => {
                ExitCode::ConfigError
            }
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
