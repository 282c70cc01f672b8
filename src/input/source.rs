//! Dataset source: raw bytes plus the declared filename.

use crate::error::{DsAuditError, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// An uploaded dataset, consumed once by the classifier.
#[derive(Debug, Clone)]
pub struct DatasetSource {
    name: String,
    bytes: Vec<u8>,
}

impl DatasetSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a dataset from disk. The file name (not the full path) becomes
    /// the declared name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| DsAuditError::read_error(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Lowercase suffix after the last `.`, empty when the name has none.
    pub fn extension(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => String::new(),
        }
    }

    /// Content decoded as text; invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}
