//! Parser traits and the parsed-table model.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Upper bound on sample rows taken from one parsed source.
pub const MAX_SAMPLE_ROWS: usize = 200;

/// Nesting depth past which the JSON dataset search stops descending.
pub const MAX_JSON_DEPTH: usize = 50;

/// Format a dataset is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DatasetFormat {
    Csv,
    Json,
}

impl DatasetFormat {
    /// Anything that is not `json` is treated as CSV.
    pub fn from_extension(ext: &str) -> Self {
        if ext.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Csv
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
        }
    }
}

impl std::fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounds applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    pub max_sample_rows: usize,
    pub max_json_depth: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_sample_rows: MAX_SAMPLE_ROWS,
            max_json_depth: MAX_JSON_DEPTH,
        }
    }
}

/// Headers, sample rows and full text extracted from a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    pub format: DatasetFormat,
    /// Lower-cased column names in first-seen order.
    pub headers: Vec<String>,
    /// One space-joined text blob per sampled record.
    pub sample_rows: Vec<String>,
    /// Lower-cased full content.
    pub raw_text: String,
}

impl ParsedTable {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.sample_rows.is_empty()
    }
}

/// A parser for one dataset format.
pub trait DatasetParser: Send + Sync {
    /// The format this parser handles.
    fn format(&self) -> DatasetFormat;

    /// Parse `content`; `name` is only used in error messages.
    fn parse(&self, content: &str, name: &str) -> Result<ParsedTable>;
}
