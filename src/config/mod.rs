//! Configuration layer for ds-audit.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File discovery and loading (YAML, JSON, TOML)
//! - `template`: `--init` template

mod error;
mod loading;
mod template;
mod types;

pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::{ClassifierConfig, Config, DiscoveryConfig, OutputConfig, VocabularyConfig};
