//! Directory walking for dataset discovery.

use crate::config::DiscoveryConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// File extensions to include (e.g., ["csv", "json"]).
    pub file_extensions: Vec<String>,
    /// Descend into subdirectories.
    pub recursive: bool,
}

impl WalkConfig {
    pub fn new(discovery: &DiscoveryConfig) -> Self {
        Self {
            file_extensions: discovery.extensions.clone(),
            ..Default::default()
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Expands files and directories into dataset file paths.
pub struct DatasetWalker {
    config: WalkConfig,
}

impl DatasetWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.config
                    .file_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    /// Files inside `dir` with a dataset extension, sorted by path.
    pub fn walk(&self, dir: &Path) -> Vec<PathBuf> {
        let max_depth = if self.config.recursive { usize::MAX } else { 1 };

        let files: Vec<PathBuf> = WalkDir::new(dir)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.matches_extension(path))
            .collect();

        trace!(dir = %dir.display(), count = files.len(), "Discovered datasets");
        files
    }

    /// Explicit files are kept as given, even when they do not exist, so the
    /// classifier can report them; directories are expanded.
    pub fn collect(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths
            .iter()
            .flat_map(|path| {
                if path.is_dir() {
                    self.walk(path)
                } else {
                    vec![path.clone()]
                }
            })
            .collect()
    }
}
