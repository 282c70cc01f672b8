//! Dataset classifier.
//!
//! Pipeline: decode → parse (CSV/JSON) → collect keyword and pattern
//! evidence → score against the configured calibration. Read and format
//! failures are folded into a conservative negative result by
//! [`DatasetClassifier::classify`]; [`DatasetClassifier::try_classify`]
//! surfaces them instead.

mod result;

pub use result::{ClassificationResult, DebugInfo};

use crate::config::{ClassifierConfig, VocabularyConfig};
use crate::error::{DsAuditError, Result};
use crate::input::DatasetSource;
use crate::parser::{DatasetFormat, ParserRegistry};
use crate::rules::EvidenceEngine;
use crate::scoring::Calibration;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, error, warn};

pub struct DatasetClassifier {
    parsers: ParserRegistry,
    engine: EvidenceEngine,
    calibration: Calibration,
}

impl DatasetClassifier {
    /// Classifier with the built-in vocabulary and default limits.
    pub fn new() -> Self {
        Self {
            parsers: ParserRegistry::default(),
            engine: EvidenceEngine::new(),
            calibration: Calibration::default(),
        }
    }

    pub fn from_config(
        classifier: &ClassifierConfig,
        vocabulary: &VocabularyConfig,
    ) -> Result<Self> {
        Ok(Self {
            parsers: ParserRegistry::new(classifier.limits()),
            engine: EvidenceEngine::from_vocabulary(vocabulary)?,
            calibration: classifier.calibration,
        })
    }

    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Classify, surfacing format errors to the caller.
    pub fn try_classify(&self, source: &DatasetSource) -> Result<ClassificationResult> {
        let started_at = Utc::now().to_rfc3339();
        let ext = source.extension();
        let format = DatasetFormat::from_extension(&ext);
        let text = source.text();

        let table = self.parsers.parse(&text, &ext, source.name())?;
        let evidence = self.engine.collect(&table);
        let score = self
            .calibration
            .score(evidence.keyword_count(), evidence.pattern_count());

        debug!(
            file = source.name(),
            format = %format,
            keywords = evidence.keyword_count(),
            patterns = evidence.pattern_count(),
            confidence = score.combined,
            threshold = score.threshold,
            accepted = score.accepted,
            "Classified dataset"
        );

        let debug_info = DebugInfo {
            filename: source.name().to_string(),
            file_size: source.byte_len(),
            file_type: Some(format),
            analyzed_headers: table.headers,
            sample_row_count: table.sample_rows.len(),
            keyword_confidence: score.keyword,
            pattern_confidence: score.pattern,
            overall_confidence: score.combined,
            threshold: Some(score.threshold),
            calibration: self.calibration,
            started_at,
            finished_at: Utc::now().to_rfc3339(),
            error: None,
        };

        Ok(ClassificationResult::scored(evidence, score, debug_info))
    }

    /// Classify; any failure yields the conservative negative result.
    pub fn classify(&self, source: &DatasetSource) -> ClassificationResult {
        let started_at = Utc::now().to_rfc3339();
        match self.try_classify(source) {
            Ok(result) => result,
            Err(e) => self.fallback(
                source.name(),
                source.byte_len(),
                Some(DatasetFormat::from_extension(&source.extension())),
                started_at,
                &e,
            ),
        }
    }

    /// Read and classify a file; read failures yield the conservative result.
    pub fn classify_path(&self, path: &Path) -> ClassificationResult {
        let started_at = Utc::now().to_rfc3339();
        match DatasetSource::from_path(path) {
            Ok(source) => self.classify(&source),
            Err(e) => self.fallback(&path.display().to_string(), 0, None, started_at, &e),
        }
    }

    fn fallback(
        &self,
        filename: &str,
        file_size: usize,
        file_type: Option<DatasetFormat>,
        started_at: String,
        error: &DsAuditError,
    ) -> ClassificationResult {
        if error.is_recoverable() {
            warn!(file = filename, error = %error, "Dataset not classified");
        } else {
            error!(
                file = filename,
                error = %error,
                cause = %error.root_cause(),
                "Unexpected classification failure"
            );
        }

        ClassificationResult::conservative(DebugInfo {
            filename: filename.to_string(),
            file_size,
            file_type,
            analyzed_headers: Vec::new(),
            sample_row_count: 0,
            keyword_confidence: 0.0,
            pattern_confidence: 0.0,
            overall_confidence: 0.0,
            threshold: None,
            calibration: self.calibration,
            started_at,
            finished_at: Utc::now().to_rfc3339(),
            error: Some(error.to_string()),
        })
    }
}

impl Default for DatasetClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with the default classifier.
pub fn classify(source: &DatasetSource) -> ClassificationResult {
    DatasetClassifier::new().classify(source)
}
