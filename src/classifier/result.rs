//! Classification result model.

use crate::parser::DatasetFormat;
use crate::rules::Evidence;
use crate::scoring::{Calibration, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Diagnostic details recorded alongside a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub filename: String,
    pub file_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<DatasetFormat>,
    pub analyzed_headers: Vec<String>,
    pub sample_row_count: usize,
    pub keyword_confidence: f64,
    pub pattern_confidence: f64,
    pub overall_confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    pub calibration: Calibration,
    pub started_at: String,
    pub finished_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Verdict, confidence and evidence for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    is_cybersecurity_related: bool,
    confidence: f64,
    matched_keywords: BTreeSet<String>,
    matched_patterns: BTreeSet<String>,
    debug_info: DebugInfo,
}

impl ClassificationResult {
    pub(crate) fn scored(evidence: Evidence, score: Score, debug_info: DebugInfo) -> Self {
        Self {
            is_cybersecurity_related: score.accepted,
            confidence: score.combined.clamp(0.0, 1.0),
            matched_keywords: evidence.keywords,
            matched_patterns: evidence.patterns,
            debug_info,
        }
    }

    /// Negative result used when the dataset could not be read or parsed.
    pub(crate) fn conservative(debug_info: DebugInfo) -> Self {
        Self {
            is_cybersecurity_related: false,
            confidence: 0.0,
            matched_keywords: BTreeSet::new(),
            matched_patterns: BTreeSet::new(),
            debug_info,
        }
    }

    pub fn is_cybersecurity_related(&self) -> bool {
        self.is_cybersecurity_related
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn matched_keywords(&self) -> &BTreeSet<String> {
        &self.matched_keywords
    }

    pub fn matched_patterns(&self) -> &BTreeSet<String> {
        &self.matched_patterns
    }

    pub fn debug_info(&self) -> &DebugInfo {
        &self.debug_info
    }

    /// The error that forced a conservative result, if any.
    pub fn error(&self) -> Option<&str> {
        self.debug_info.error.as_deref()
    }
}
