//! Structural fingerprints of network and security data.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// One entry of the fixed, ordered pattern table.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub name: &'static str,
    pub description: &'static str,
    pub regex: Regex,
}

fn rule(name: &'static str, description: &'static str, pattern: &str) -> PatternRule {
    PatternRule {
        name,
        description,
        regex: Regex::new(pattern).expect("Invalid built-in pattern"),
    }
}

// Order is part of the output contract: identifiers are `pattern_<index>`.
static PATTERN_TABLE: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            "ipv4_address",
            "IPv4 address in dotted-quad notation",
            r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b",
        ),
        rule(
            "port_number",
            "TCP/UDP port number between 1 and 65535",
            r"\b(?:6553[0-5]|655[0-2][0-9]|65[0-4][0-9]{2}|6[0-4][0-9]{3}|[1-5][0-9]{4}|[1-9][0-9]{0,3})\b",
        ),
        rule(
            "mac_address",
            "MAC address with ':' or '-' separators",
            r"\b(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}\b",
        ),
        rule(
            "access_log_timestamp",
            "Apache/Nginx access log timestamp",
            r"\b\d{1,2}/\w{3}/\d{4}:\d{2}:\d{2}:\d{2}\b",
        ),
        rule(
            "traffic_label",
            "Traffic label (normal, attack, anomaly, benign, malicious)",
            r"(?i)\b(?:normal|attack|anomaly|benign|malicious)\b",
        ),
        rule(
            "attack_category",
            "Attack category (dos, r2l, u2r, probe)",
            r"(?i)\b(?:dos|r2l|u2r|probe)\b",
        ),
        rule("md5_digest", "MD5 hex digest", r"(?i)\b[0-9a-f]{32}\b"),
        rule("sha1_digest", "SHA-1 hex digest", r"(?i)\b[0-9a-f]{40}\b"),
        rule("sha256_digest", "SHA-256 hex digest", r"(?i)\b[0-9a-f]{64}\b"),
        rule("url", "HTTP or HTTPS URL", r#"(?i)\bhttps?://[^\s,"']+"#),
    ]
});

/// The ordered pattern table.
pub fn pattern_table() -> &'static [PatternRule] {
    &PATTERN_TABLE
}

/// Opaque identifier of the pattern at `index`.
pub fn pattern_id(index: usize) -> String {
    format!("pattern_{index}")
}

/// Table entry behind an identifier produced by [`pattern_id`].
pub fn pattern_rule(id: &str) -> Option<&'static PatternRule> {
    id.strip_prefix("pattern_")
        .and_then(|index| index.parse::<usize>().ok())
        .and_then(|index| pattern_table().get(index))
}

/// Tests sample rows and full text against the pattern table.
#[derive(Debug, Clone, Copy)]
pub struct PatternMatcher {
    patterns: &'static [PatternRule],
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self {
            patterns: pattern_table(),
        }
    }

    /// Identifiers of every pattern matching at least one input. A pattern
    /// is not re-tested once it has matched.
    pub fn find_matches(&self, sample_rows: &[String], text: &str) -> BTreeSet<String> {
        let mut matched = vec![false; self.patterns.len()];
        let mut remaining = self.patterns.len();

        let inputs = sample_rows
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(text));

        for input in inputs {
            if remaining == 0 {
                break;
            }
            for (index, pattern) in self.patterns.iter().enumerate() {
                if !matched[index] && pattern.regex.is_match(input) {
                    matched[index] = true;
                    remaining -= 1;
                }
            }
        }

        matched
            .iter()
            .enumerate()
            .filter(|(_, hit)| **hit)
            .map(|(index, _)| pattern_id(index))
            .collect()
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}
