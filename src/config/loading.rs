//! Configuration loading functions.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::ConfigError;
use super::types::Config;

/// Project-level config file names, in search order.
pub const PROJECT_CONFIG_FILES: &[&str] = &[
    ".ds-audit.yaml",
    ".ds-audit.yml",
    ".ds-audit.json",
    ".ds-audit.toml",
];

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let config: Config = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            })?,
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.display().to_string(),
                source: e,
            })?,
            _ => {
                return Err(ConfigError::UnsupportedFormat(
                    path.display().to_string(),
                    ext,
                ));
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the project directory or global config.
    ///
    /// Search order:
    /// 1. `.ds-audit.yaml` / `.yml` / `.json` / `.toml` in `project_root`
    /// 2. `~/.config/ds-audit/config.yaml`
    /// 3. Default configuration
    ///
    /// Files that fail to load are skipped.
    pub fn load(project_root: Option<&Path>) -> Self {
        if let Some(root) = project_root {
            for filename in PROJECT_CONFIG_FILES {
                let path = root.join(filename);
                if path.exists()
                    && let Ok(config) = Self::from_file(&path)
                {
                    debug!(path = %path.display(), "Loaded project config");
                    return config;
                }
            }
        }

        if let Some(global_config) = Self::global_path()
            && global_config.exists()
            && let Ok(config) = Self::from_file(&global_config)
        {
            debug!(path = %global_config.display(), "Loaded global config");
            return config;
        }

        Self::default()
    }

    /// Load the explicitly requested file, or fall back to discovery.
    pub fn resolve(explicit: Option<&Path>, project_root: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Ok(Self::load(project_root)),
        }
    }

    /// Location of the per-user config file.
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ds-audit").join("config.yaml"))
    }
}
