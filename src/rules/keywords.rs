//! Cybersecurity vocabulary and keyword matching.

use regex::RegexSet;
use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

/// Attack types and classifications.
pub const ATTACK_KEYWORDS: &[&str] = &[
    "attack", "threat", "malware", "virus", "worm", "trojan", "ransomware", "spyware",
    "phishing", "ddos", "dos", "r2l", "u2r", "probe", "exploit", "botnet", "backdoor",
    "rootkit", "keylogger", "xss", "csrf", "injection", "overflow",
];

/// Network and protocol terms.
pub const NETWORK_KEYWORDS: &[&str] = &[
    "ip", "port", "protocol", "tcp", "udp", "icmp", "http", "https", "ftp", "ssh", "telnet",
    "smtp", "dns", "dhcp", "network", "traffic", "packet", "frame", "payload",
];

/// Security operations terms.
pub const SECURITY_OPS_KEYWORDS: &[&str] = &[
    "intrusion", "detection", "prevention", "firewall", "ids", "ips", "siem", "anomaly",
    "signature", "alert", "alarm", "log", "audit", "incident", "vulnerability", "patch",
    "update",
];

/// Column names of the KDD'99 / NSL-KDD intrusion-detection feature schema.
pub const FEATURE_SCHEMA_KEYWORDS: &[&str] = &[
    "duration", "protocol_type", "service", "flag", "src_bytes", "dst_bytes", "land",
    "wrong_fragment", "urgent", "hot", "num_failed_logins", "logged_in", "num_compromised",
    "root_shell", "su_attempted", "num_root", "num_file_creations", "num_shells",
    "num_access_files", "num_outbound_cmds", "is_host_login", "is_guest_login", "count",
    "srv_count", "serror_rate", "srv_serror_rate", "rerror_rate", "srv_rerror_rate",
    "same_srv_rate", "diff_srv_rate", "srv_diff_host_rate", "dst_host_count",
    "dst_host_srv_count", "dst_host_same_srv_rate", "dst_host_diff_srv_rate",
    "dst_host_same_src_port_rate", "dst_host_srv_diff_host_rate", "dst_host_serror_rate",
    "dst_host_srv_serror_rate", "dst_host_rerror_rate", "dst_host_srv_rerror_rate",
];

/// The built-in vocabulary, deduplicated, in table order.
pub static CYBER_KEYWORDS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut seen = HashSet::new();
    [
        ATTACK_KEYWORDS,
        NETWORK_KEYWORDS,
        SECURITY_OPS_KEYWORDS,
        FEATURE_SCHEMA_KEYWORDS,
    ]
    .concat()
    .into_iter()
    .filter(|term| seen.insert(*term))
    .collect()
});

static BUILTIN_MATCHER: LazyLock<KeywordMatcher> = LazyLock::new(|| {
    KeywordMatcher::new(CYBER_KEYWORDS.iter().copied())
        .expect("Invalid built-in vocabulary pattern")
});

/// Whole-word pattern for a term. A boundary is only required at ends that
/// are word characters, so terms like `c++` can still match.
fn word_pattern(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let start = if term.starts_with(is_word) { r"\b" } else { "" };
    let end = if term.ends_with(is_word) { r"\b" } else { "" };
    format!("{start}{}{end}", regex::escape(term))
}

/// Matches a vocabulary against column headers and the full dataset text.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    terms: Vec<String>,
    word_set: RegexSet,
}

impl KeywordMatcher {
    /// Build a matcher from arbitrary terms. Terms are trimmed, lower-cased
    /// and deduplicated; empty terms are skipped.
    pub fn new<I, S>(terms: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();

        let word_set = RegexSet::new(terms.iter().map(|t| word_pattern(t)))?;

        Ok(Self { terms, word_set })
    }

    /// The shared matcher over [`CYBER_KEYWORDS`].
    pub fn builtin() -> &'static KeywordMatcher {
        &BUILTIN_MATCHER
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms contained in any of the (lower-cased) headers.
    pub fn match_headers(&self, headers: &[String]) -> BTreeSet<String> {
        self.terms
            .iter()
            .filter(|term| headers.iter().any(|h| h.contains(term.as_str())))
            .cloned()
            .collect()
    }

    /// Terms appearing as whole words in the (lower-cased) text.
    pub fn match_text(&self, text: &str) -> BTreeSet<String> {
        self.word_set
            .matches(text)
            .into_iter()
            .map(|i| self.terms[i].clone())
            .collect()
    }

    /// Union of header and text matches.
    pub fn find_matches(&self, headers: &[String], text: &str) -> BTreeSet<String> {
        let mut matched = self.match_headers(headers);
        matched.extend(self.match_text(text));
        matched
    }
}
