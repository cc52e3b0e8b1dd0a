// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles cmdframe.toml lookup and parsing with version validation and
//! unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bulk::BulkSettings;
use crate::error::{Error, Result};

/// File name searched for when no `--config` is given.
pub const CONFIG_FILE: &str = "cmdframe.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "bulk", "block"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Batching configuration.
    #[serde(default)]
    pub bulk: BulkConfig,

    /// Block pairs forming dynamic batches.
    #[serde(default = "Config::default_blocks")]
    pub block: Vec<BlockConfig>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            bulk: BulkConfig::default(),
            block: Self::default_blocks(),
            unknown: BTreeMap::new(),
        }
    }
}

impl Config {
    fn default_blocks() -> Vec<BlockConfig> {
        vec![BlockConfig {
            open: '{',
            close: '}',
        }]
    }

    /// Batching settings described by this config.
    pub fn bulk_settings(&self) -> BulkSettings {
        BulkSettings {
            size: self.bulk.size,
            terminator: self.bulk.terminator.clone(),
            blocks: self.block.iter().map(|b| (b.open, b.close)).collect(),
        }
    }
}

/// `[bulk]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkConfig {
    /// Commands per static batch (default: 3).
    #[serde(default = "BulkConfig::default_size")]
    pub size: usize,

    /// Sequence ending a command (default: "\n").
    #[serde(default = "BulkConfig::default_terminator")]
    pub terminator: String,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            size: Self::default_size(),
            terminator: Self::default_terminator(),
        }
    }
}

impl BulkConfig {
    pub(crate) fn default_size() -> usize {
        3
    }

    pub(crate) fn default_terminator() -> String {
        "\n".to_string()
    }
}

/// `[[block]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockConfig {
    pub open: char,
    pub close: char,
}

/// Nearest `cmdframe.toml` at or above `start`, not crossing a git root.
pub fn find(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Config for a run started in `cwd`.
///
/// An explicit path (`-C` or `CMDFRAME_CONFIG`) must exist. Otherwise the
/// nearest discovered file is loaded, falling back to defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        Some(path) => path.to_path_buf(),
        None => match find(cwd) {
            Some(found) => found,
            None => {
                tracing::debug!("no {} above {}, using defaults", CONFIG_FILE, cwd.display());
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!("loading config from {}", path.display());
    load(&path)
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let config: Config = toml::from_str(content).map_err(|e| config_error(e, path))?;

    for key in config.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    validate(&config, path)?;
    Ok(config)
}

fn validate(config: &Config, path: &Path) -> Result<()> {
    let invalid = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    if config.bulk.size == 0 {
        return Err(invalid("bulk.size must be at least 1".to_string()));
    }
    if config.bulk.terminator.is_empty() {
        return Err(invalid("bulk.terminator must not be empty".to_string()));
    }
    for (i, block) in config.block.iter().enumerate() {
        if block.open == block.close {
            return Err(invalid(format!(
                "block opens and closes with the same symbol {:?}",
                block.open
            )));
        }
        if config.block[..i].iter().any(|b| b.open == block.open) {
            return Err(invalid(format!("duplicate block opening {:?}", block.open)));
        }
    }
    Ok(())
}

fn config_error(e: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("{}: unrecognized field `{}`, ignoring", path.display(), key);
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
