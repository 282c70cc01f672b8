use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Keywords and structural patterns matched in one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub keywords: BTreeSet<String>,
    pub patterns: BTreeSet<String>,
}

impl Evidence {
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.patterns.is_empty()
    }
}
