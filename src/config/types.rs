//! Configuration type definitions.

use crate::cli::OutputFormat;
use crate::parser::{MAX_JSON_DEPTH, MAX_SAMPLE_ROWS, ParseLimits};
use crate::scoring::Calibration;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::error::ConfigError;

/// Main configuration structure for ds-audit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classifier: ClassifierConfig,
    pub vocabulary: VocabularyConfig,
    pub output: OutputConfig,
    pub discovery: DiscoveryConfig,
}

impl Config {
    /// Reject values that would make classification meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classifier.max_sample_rows == 0 {
            return Err(ConfigError::InvalidValue {
                field: "classifier.max_sample_rows",
                message: "must be at least 1".to_string(),
            });
        }
        if self.discovery.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "discovery.extensions",
                message: "must list at least one extension".to_string(),
            });
        }
        Ok(())
    }
}

/// Scoring and parsing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Scoring tables: "graduated" or "legacy".
    pub calibration: Calibration,
    /// Sample rows taken per CSV file or per JSON dataset array.
    pub max_sample_rows: usize,
    /// Nesting depth searched for dataset arrays in JSON files.
    pub max_json_depth: usize,
}

impl ClassifierConfig {
    pub fn limits(&self) -> ParseLimits {
        ParseLimits {
            max_sample_rows: self.max_sample_rows,
            max_json_depth: self.max_json_depth,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            calibration: Calibration::default(),
            max_sample_rows: MAX_SAMPLE_ROWS,
            max_json_depth: MAX_JSON_DEPTH,
        }
    }
}

/// Adjustments to the built-in keyword vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Terms matched in addition to the built-in vocabulary.
    pub extra_keywords: Vec<String>,
    /// Built-in terms to ignore.
    pub disabled_keywords: Vec<String>,
}

impl VocabularyConfig {
    pub fn is_default(&self) -> bool {
        self.extra_keywords.is_empty() && self.disabled_keywords.is_empty()
    }

    /// Disabled terms, trimmed and lower-cased.
    pub fn disabled_set(&self) -> HashSet<String> {
        self.disabled_keywords
            .iter()
            .map(|t| t.trim().to_lowercase())
            .collect()
    }
}

/// Report rendering options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "terminal" or "json".
    pub format: Option<String>,
}

impl OutputConfig {
    pub fn parsed_format(&self) -> Result<Option<OutputFormat>, ConfigError> {
        match self.format.as_deref().map(str::to_lowercase).as_deref() {
            None => Ok(None),
            Some("terminal") => Ok(Some(OutputFormat::Terminal)),
            Some("json") => Ok(Some(OutputFormat::Json)),
            Some(other) => Err(ConfigError::InvalidValue {
                field: "output.format",
                message: format!("unknown format '{other}' (expected terminal or json)"),
            }),
        }
    }
}

/// Which files are picked up when a directory is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// File extensions (without the dot) treated as datasets.
    pub extensions: Vec<String>,
}

impl DiscoveryConfig {
    pub fn is_dataset_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["csv".to_string(), "json".to_string()],
        }
    }
}
