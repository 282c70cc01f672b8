use crate::scoring::Calibration;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "ds-audit",
    version,
    about = "Checks whether CSV/JSON datasets look like network-intrusion or cybersecurity data",
    long_about = "ds-audit inspects dataset files for cybersecurity vocabulary and structural patterns \
                  (IP/MAC addresses, ports, attack labels, digests, URLs) and decides whether each one \
                  resembles an intrusion-detection dataset."
)]
pub struct Cli {
    /// Dataset files or directories to classify
    #[arg(required_unless_present_any = ["init", "list_vocabulary"])]
    pub paths: Vec<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Scoring calibration (overrides the config file)
    #[arg(long, value_enum)]
    pub calibration: Option<Calibration>,

    /// Configuration file (YAML, JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output: debug logging and per-file debug details
    #[arg(short, long)]
    pub verbose: bool,

    /// Write a .ds-audit.yaml template to the current directory
    #[arg(long)]
    pub init: bool,

    /// Print the keyword vocabulary and pattern table
    #[arg(long)]
    pub list_vocabulary: bool,
}
