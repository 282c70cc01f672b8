pub mod classifier;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod input;
pub mod parser;
pub mod reporter;
pub mod rules;
pub mod run;
pub mod scoring;

#[cfg(test)]
pub mod test_utils;

pub use classifier::{ClassificationResult, DatasetClassifier, DebugInfo, classify};
pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{DsAuditError, Result};
pub use input::DatasetSource;
pub use parser::{DatasetFormat, ParsedTable};
pub use reporter::{
    ClassificationReport, Reporter, json::JsonReporter, terminal::TerminalReporter,
};
pub use rules::{Evidence, EvidenceEngine};
pub use scoring::Calibration;
