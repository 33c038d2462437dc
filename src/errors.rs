// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolsError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Malformed instance header in {path:?}: {reason}")]
    MalformedHeader { path: PathBuf, reason: String },

    #[error("Malformed job on line {line} of {path:?}: {reason}")]
    MalformedJob {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Malformed value for '{label}' in {path:?}: {value:?}")]
    MalformedValue {
        path: PathBuf,
        label: String,
        value: String,
    },

    #[error("Missing '{label}' in {path:?}")]
    MissingField { path: PathBuf, label: String },

    #[error("Need at least {needed} result files, got {got}")]
    NotEnoughSamples { needed: usize, got: usize },

    #[error("Output {output:?} would overwrite input {input:?}")]
    OutputCollision { output: PathBuf, input: PathBuf },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToolsError {
    /// Attach a file path to parse errors raised before the path was known.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match self {
            ToolsError::MalformedHeader { reason, .. } => {
                ToolsError::MalformedHeader { path, reason }
            }
            ToolsError::MalformedJob { line, reason, .. } => {
                ToolsError::MalformedJob { path, line, reason }
            }
            ToolsError::MalformedValue { label, value, .. } => {
                ToolsError::MalformedValue { path, label, value }
            }
            ToolsError::MissingField { label, .. } => ToolsError::MissingField { path, label },
            other => other,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ToolsError>;
