//! Error types for ds-audit.
//!
//! Read and format failures never reach the CLI user as errors: the
//! classifier folds them into a conservative negative result. The remaining
//! variants (configuration, output) are fatal to the binary.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::parser::DatasetFormat;

/// Unified error type for all ds-audit operations.
#[derive(Error, Debug)]
pub enum DsAuditError {
    /// The dataset content could not be read at all.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content does not parse as its declared format.
    #[error("Invalid {format} in {name}: {source}")]
    Format {
        name: String,
        format: DatasetFormat,
        #[source]
        source: serde_json::Error,
    },

    /// A vocabulary term produced an invalid pattern.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DsAuditError {
    /// Create a read error for the given path.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON format error for the named source.
    pub fn json_format_error(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Format {
            name: name.into(),
            format: DatasetFormat::Json,
            source,
        }
    }

    /// Whether the classifier recovers from this error with a conservative result.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Format { .. })
    }

    /// Get the root cause of the error chain.
    pub fn root_cause(&self) -> &dyn std::error::Error {
        let mut current: &dyn std::error::Error = self;
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }
}

pub type Result<T> = std::result::Result<T, DsAuditError>;
