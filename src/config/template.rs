//! Configuration template generation.

use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::types::Config;

impl Config {
    /// Generate a YAML configuration template with comments.
    pub fn generate_template() -> String {
        r#"# ds-audit Configuration File
# Place this file as .ds-audit.yaml in the directory you run ds-audit from

# =============================================================================
# CLASSIFIER
# =============================================================================
classifier:
  # Scoring tables: graduated (default) or legacy
  #   graduated: keyword steps 0.4/0.65/0.85/0.9/0.95, threshold 0.85..0.75
  #   legacy:    keyword steps 0.3/0.6/0.85/0.95, fixed threshold 0.80
  calibration: graduated

  # Sample rows taken per CSV file or per JSON dataset array
  max_sample_rows: 200

  # Nesting depth searched for dataset arrays in JSON files
  max_json_depth: 50

# =============================================================================
# VOCABULARY
# =============================================================================
vocabulary:
  # Additional terms counted as cybersecurity keywords
  extra_keywords: []
  #   - beacon
  #   - c2

  # Built-in terms to ignore (see `ds-audit --list-vocabulary`)
  disabled_keywords: []
  #   - update
  #   - count

# =============================================================================
# OUTPUT
# =============================================================================
output:
  # Output format: terminal, json
  format: terminal

# =============================================================================
# DISCOVERY
# =============================================================================
discovery:
  # Extensions picked up when a directory is given
  extensions:
    - csv
    - json
"#
        .to_string()
    }

    /// Write the template to `path`, refusing to overwrite an existing file.
    pub fn write_template(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.display().to_string()));
        }
        fs::write(path, Self::generate_template()).map_err(|e| ConfigError::WriteFile {
            path: path.display().to_string(),
            source: e,
        })
    }
}
