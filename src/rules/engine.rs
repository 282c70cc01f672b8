use crate::config::VocabularyConfig;
use crate::parser::ParsedTable;
use crate::rules::keywords::{CYBER_KEYWORDS, KeywordMatcher};
use crate::rules::patterns::PatternMatcher;
use crate::rules::types::Evidence;
use std::borrow::Cow;
use tracing::trace;

/// Collects keyword and pattern evidence from a parsed dataset.
#[derive(Debug, Clone)]
pub struct EvidenceEngine {
    keywords: Cow<'static, KeywordMatcher>,
    patterns: PatternMatcher,
}

impl EvidenceEngine {
    /// Engine over the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            keywords: Cow::Borrowed(KeywordMatcher::builtin()),
            patterns: PatternMatcher::new(),
        }
    }

    /// Engine over the built-in vocabulary adjusted by configuration.
    pub fn from_vocabulary(vocabulary: &VocabularyConfig) -> Result<Self, regex::Error> {
        if vocabulary.is_default() {
            return Ok(Self::new());
        }

        let disabled = vocabulary.disabled_set();
        let terms = CYBER_KEYWORDS
            .iter()
            .map(|t| t.to_string())
            .chain(vocabulary.extra_keywords.iter().cloned())
            .filter(|t| !disabled.contains(&t.trim().to_lowercase()));

        Ok(Self {
            keywords: Cow::Owned(KeywordMatcher::new(terms)?),
            patterns: PatternMatcher::new(),
        })
    }

    pub fn vocabulary(&self) -> &[String] {
        self.keywords.terms()
    }

    pub fn collect(&self, table: &ParsedTable) -> Evidence {
        trace!(
            headers = table.headers.len(),
            rows = table.sample_rows.len(),
            terms = self.keywords.terms().len(),
            "Collecting evidence"
        );

        Evidence {
            keywords: self.keywords.find_matches(&table.headers, &table.raw_text),
            patterns: self
                .patterns
                .find_matches(&table.sample_rows, &table.raw_text),
        }
    }
}

impl Default for EvidenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{CsvParser, DatasetParser};

    fn table(content: &str) -> ParsedTable {
        CsvParser::default().parse(content, "test.csv").unwrap()
    }

    #[test]
    fn test_collect_intrusion_dataset() {
        let evidence = EvidenceEngine::new().collect(&table(
            "src_ip,dst_port,label\n192.168.0.4,443,attack\n",
        ));
        assert!(evidence.keywords.contains("ip"));
        assert!(evidence.keywords.contains("port"));
        assert!(evidence.keywords.contains("attack"));
        assert!(evidence.patterns.contains("pattern_0"));
        assert!(evidence.patterns.contains("pattern_4"));
    }

    #[test]
    fn test_collect_unrelated_dataset() {
        let evidence =
            EvidenceEngine::new().collect(&table("name,age,city\nalice,thirty,paris\n"));
        assert!(evidence.is_empty());
    }

    #[test]
    fn test_extra_keywords() {
        let vocabulary = VocabularyConfig {
            extra_keywords: vec!["beacon".to_string()],
            disabled_keywords: vec![],
        };
        let engine = EvidenceEngine::from_vocabulary(&vocabulary).unwrap();
        let evidence = engine.collect(&table("beacon_interval\n30\n"));
        assert!(evidence.keywords.contains("beacon"));
    }

    #[test]
    fn test_disabled_keywords() {
        let vocabulary = VocabularyConfig {
            extra_keywords: vec![],
            disabled_keywords: vec!["IP".to_string()],
        };
        let engine = EvidenceEngine::from_vocabulary(&vocabulary).unwrap();
        assert!(!engine.vocabulary().iter().any(|t| t == "ip"));
        let evidence = engine.collect(&table("zip_code\n12345\n"));
        assert!(!evidence.keywords.contains("ip"));
    }

    #[test]
    fn test_default_vocabulary_uses_builtin() {
        let engine = EvidenceEngine::from_vocabulary(&VocabularyConfig::default()).unwrap();
        assert_eq!(engine.vocabulary().len(), CYBER_KEYWORDS.len());
    }
}
