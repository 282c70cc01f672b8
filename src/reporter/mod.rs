pub mod json;
pub mod terminal;

use crate::classifier::ClassificationResult;
use crate::scoring::Calibration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileClassification {
    pub target: String,
    pub result: ClassificationResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Rejections caused by read or format errors.
    pub errors: usize,
    pub passed: bool,
}

impl Summary {
    pub fn from_results(results: &[FileClassification]) -> Self {
        let accepted = results
            .iter()
            .filter(|f| f.result.is_cybersecurity_related())
            .count();
        let errors = results
            .iter()
            .filter(|f| f.result.error().is_some())
            .count();

        Self {
            total: results.len(),
            accepted,
            rejected: results.len() - accepted,
            errors,
            passed: accepted == results.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub version: String,
    pub classified_at: String,
    pub calibration: Calibration,
    pub summary: Summary,
    pub results: Vec<FileClassification>,
}

impl ClassificationReport {
    pub fn new(calibration: Calibration, results: Vec<FileClassification>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            classified_at: chrono::Utc::now().to_rfc3339(),
            calibration,
            summary: Summary::from_results(&results),
            results,
        }
    }
}

pub trait Reporter {
    fn report(&self, report: &ClassificationReport) -> String;
}
