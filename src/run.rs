//! Classification run: config resolution, discovery, parallel classification.

use crate::classifier::DatasetClassifier;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::discovery::{DatasetWalker, WalkConfig};
use crate::error::Result;
use crate::reporter::{
    ClassificationReport, FileClassification, Reporter, json::JsonReporter,
    terminal::TerminalReporter,
};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Configuration after applying CLI overrides.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub config: Config,
    pub format: OutputFormat,
}

impl EffectiveConfig {
    /// Resolve the config file (explicit `--config` or discovery from
    /// `project_root`) and apply CLI flags on top.
    pub fn from_cli(cli: &Cli, project_root: Option<&Path>) -> Result<Self> {
        let mut config = Config::resolve(cli.config.as_deref(), project_root)?;

        if let Some(calibration) = cli.calibration {
            config.classifier.calibration = calibration;
        }

        let format = match cli.format {
            Some(format) => format,
            None => config.output.parsed_format()?.unwrap_or_default(),
        };

        debug!(
            calibration = %config.classifier.calibration,
            max_sample_rows = config.classifier.max_sample_rows,
            format = ?format,
            "Resolved configuration"
        );

        Ok(Self { config, format })
    }
}

/// Classify every dataset reachable from the CLI paths.
pub fn run_classification(cli: &Cli, effective: &EffectiveConfig) -> Result<ClassificationReport> {
    let config = &effective.config;
    let classifier = DatasetClassifier::from_config(&config.classifier, &config.vocabulary)?;

    let walker =
        DatasetWalker::new(WalkConfig::new(&config.discovery).with_recursive(cli.recursive));
    let paths = walker.collect(&cli.paths);
    info!(files = paths.len(), "Classifying datasets");

    let results: Vec<FileClassification> = paths
        .par_iter()
        .map(|path| FileClassification {
            target: path.display().to_string(),
            result: classifier.classify_path(path),
        })
        .collect();

    Ok(ClassificationReport::new(classifier.calibration(), results))
}

pub fn format_report(report: &ClassificationReport, format: OutputFormat, verbose: bool) -> String {
    match format {
        OutputFormat::Terminal => TerminalReporter::new(verbose).report(report),
        OutputFormat::Json => JsonReporter::new().report(report),
    }
}
