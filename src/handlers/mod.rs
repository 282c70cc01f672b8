//! Entry points for the binary's modes. Each returns the process exit code:
//! 0 when every dataset is accepted, 1 when any is rejected, 2 on errors.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{DsAuditError, Result};
use crate::rules::{CYBER_KEYWORDS, pattern_id, pattern_table};
use crate::run::{EffectiveConfig, format_report, run_classification};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

/// Handle --init.
pub fn handle_init_config(dir: &Path) -> ExitCode {
    let path = dir.join(".ds-audit.yaml");
    match Config::write_template(&path) {
        Ok(()) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Handle --list-vocabulary.
pub fn handle_list_vocabulary() -> ExitCode {
    println!("Keywords ({}):", CYBER_KEYWORDS.len());
    for chunk in CYBER_KEYWORDS.chunks(8) {
        println!("  {}", chunk.join(", "));
    }

    println!("\nPatterns ({}):", pattern_table().len());
    for (index, rule) in pattern_table().iter().enumerate() {
        println!("  {:<11} {:<22} {}", pattern_id(index), rule.name, rule.description);
    }

    ExitCode::SUCCESS
}

/// Classify the CLI paths and print or write the report.
pub fn handle_classify(cli: &Cli, project_root: Option<&Path>) -> ExitCode {
    info!(paths = ?cli.paths, "Starting classification");

    let effective = match EffectiveConfig::from_cli(cli, project_root) {
        Ok(effective) => effective,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let report = match run_classification(cli, &effective) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if report.results.is_empty() {
        eprintln!("No dataset files found");
        return ExitCode::from(2);
    }

    let output = format_report(&report, effective.format, cli.verbose);

    if let Some(ref output_path) = cli.output {
        match write_output(output_path, &output) {
            Ok(()) => println!("Output written to {}", output_path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        println!("{}", output);
    }

    debug!(
        total = report.summary.total,
        accepted = report.summary.accepted,
        errors = report.summary.errors,
        "Classification completed"
    );

    if report.summary.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn write_output(path: &Path, output: &str) -> Result<()> {
    fs::write(path, output).map_err(|source| DsAuditError::Write {
        path: path.to_path_buf(),
        source,
    })
}
