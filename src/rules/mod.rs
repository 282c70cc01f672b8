pub mod engine;
pub mod keywords;
pub mod patterns;
pub mod types;

pub use engine::EvidenceEngine;
pub use keywords::{CYBER_KEYWORDS, KeywordMatcher};
pub use patterns::{PatternMatcher, PatternRule, pattern_id, pattern_rule, pattern_table};
pub use types::Evidence;
