//! `fibseq.toml` discovery and parsing.
//!
//! Resolution order: an explicit path, then `FIBSEQ_CONFIG`, then a walk from
//! the starting directory up to the nearest `.git` (or the filesystem root).
//! No file means defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::diagnostics::SequenceError;
use crate::length::SequenceLength;
use crate::render::OutputFormat;
use crate::sequence::Strategy;

pub const CONFIG_FILE_NAME: &str = "fibseq.toml";
pub const CONFIG_ENV_VAR: &str = "FIBSEQ_CONFIG";
pub const DEFAULT_MAX_LENGTH: usize = 100_000;

/// Resolved settings for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub strategy: Strategy,
    pub max_length: usize,
    pub format: OutputFormat,
    /// Where the settings came from. None means built-in defaults.
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Iterative,
            max_length: DEFAULT_MAX_LENGTH,
            format: OutputFormat::Plain,
            source: None,
        }
    }
}

impl Config {
    /// Reject lengths above `max_length`. Library calls have no such limit.
    pub fn check_length(&self, len: SequenceLength) -> Result<SequenceLength, SequenceError> {
        if len.get() > self.max_length {
            return Err(SequenceError::LimitExceeded { requested: len.get(), max: self.max_length });
        }
        Ok(len)
    }
}

// ---- TOML deserialization types ----

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    generate: TomlGenerate,
    #[serde(default)]
    output: TomlOutput,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlGenerate {
    strategy: Option<Strategy>,
    max_length: Option<usize>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlOutput {
    format: Option<OutputFormat>,
}

// ---- Discovery ----

/// Walk from start_dir up to .git or FS root, looking for fibseq.toml.
fn find_config_walk(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        // .git may be a file in worktrees and submodules
        if dir.join(".git").exists() {
            return None;
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Load configuration using the full resolution order.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<Config, SequenceError> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "using config from --config");
        return load_file(path);
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
        tracing::debug!(path = %path.display(), "using config from {CONFIG_ENV_VAR}");
        return load_file(&path);
    }

    match find_config_walk(start_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "discovered config");
            load_file(&path)
        }
        None => {
            tracing::debug!(start = %start_dir.display(), "no {CONFIG_FILE_NAME} found; using defaults");
            Ok(Config::default())
        }
    }
}

/// Read and validate a single config file.
pub fn load_file(path: &Path) -> Result<Config, SequenceError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SequenceError::config(format!("{CONFIG_FILE_NAME}: could not read file: {e}"), path.to_path_buf())
    })?;
    parse(&content, path)
}

/// Parse config text. `path` is only used for error reporting.
pub fn parse(content: &str, path: &Path) -> Result<Config, SequenceError> {
    let raw: TomlConfig = toml::from_str(content).map_err(|e| {
        SequenceError::config(format!("{CONFIG_FILE_NAME}: invalid syntax: {e}"), path.to_path_buf())
    })?;

    let defaults = Config::default();
    let max_length = raw.generate.max_length.unwrap_or(defaults.max_length);
    if max_length == 0 {
        return Err(SequenceError::config(
            format!("{CONFIG_FILE_NAME}: 'max_length' in [generate] must be at least 1"),
            path.to_path_buf(),
        ));
    }

    Ok(Config {
        strategy: raw.generate.strategy.unwrap_or(defaults.strategy),
        max_length,
        format: raw.output.format.unwrap_or(defaults.format),
        source: Some(path.to_path_buf()),
    })
}
