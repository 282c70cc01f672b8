use serde::{Deserialize, Serialize};

/// Weight of keyword confidence in the combined score.
pub const KEYWORD_WEIGHT: f64 = 0.7;
/// Weight of pattern confidence in the combined score.
pub const PATTERN_WEIGHT: f64 = 0.3;

/// One step of a step function: applies when the count is at least `min_count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub min_count: usize,
    pub value: f64,
}

const fn step(min_count: usize, value: f64) -> Step {
    Step { min_count, value }
}

// Steps are ordered by descending `min_count`; the first one that applies wins.
const GRADUATED_KEYWORD_STEPS: &[Step] = &[
    step(8, 0.95),
    step(5, 0.9),
    step(3, 0.85),
    step(2, 0.65),
    step(1, 0.4),
];
const GRADUATED_PATTERN_STEPS: &[Step] = &[step(3, 0.9), step(2, 0.85), step(1, 0.7)];
const GRADUATED_THRESHOLD_STEPS: &[Step] = &[
    step(8, 0.75),
    step(5, 0.78),
    step(3, 0.80),
    step(0, 0.85),
];

const LEGACY_KEYWORD_STEPS: &[Step] = &[
    step(5, 0.95),
    step(3, 0.85),
    step(2, 0.6),
    step(1, 0.3),
];
const LEGACY_PATTERN_STEPS: &[Step] = &[step(2, 0.9), step(1, 0.7)];
const LEGACY_THRESHOLD_STEPS: &[Step] = &[step(0, 0.80)];

fn lookup(steps: &[Step], count: usize) -> f64 {
    steps
        .iter()
        .find(|s| count >= s.min_count)
        .map_or(0.0, |s| s.value)
}

/// A named set of scoring tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Calibration {
    /// Finer keyword steps and a threshold that drops as keyword matches grow.
    #[default]
    Graduated,
    /// Coarser steps and a fixed 0.80 threshold.
    Legacy,
}

impl Calibration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Calibration::Graduated => "graduated",
            Calibration::Legacy => "legacy",
        }
    }

    fn keyword_steps(&self) -> &'static [Step] {
        match self {
            Calibration::Graduated => GRADUATED_KEYWORD_STEPS,
            Calibration::Legacy => LEGACY_KEYWORD_STEPS,
        }
    }

    fn pattern_steps(&self) -> &'static [Step] {
        match self {
            Calibration::Graduated => GRADUATED_PATTERN_STEPS,
            Calibration::Legacy => LEGACY_PATTERN_STEPS,
        }
    }

    fn threshold_steps(&self) -> &'static [Step] {
        match self {
            Calibration::Graduated => GRADUATED_THRESHOLD_STEPS,
            Calibration::Legacy => LEGACY_THRESHOLD_STEPS,
        }
    }

    pub fn keyword_confidence(&self, keyword_count: usize) -> f64 {
        lookup(self.keyword_steps(), keyword_count)
    }

    pub fn pattern_confidence(&self, pattern_count: usize) -> f64 {
        lookup(self.pattern_steps(), pattern_count)
    }

    /// Minimum combined confidence for a positive verdict.
    pub fn threshold(&self, keyword_count: usize) -> f64 {
        lookup(self.threshold_steps(), keyword_count)
    }

    pub fn score(&self, keyword_count: usize, pattern_count: usize) -> Score {
        let keyword = self.keyword_confidence(keyword_count);
        let pattern = self.pattern_confidence(pattern_count);
        let combined = combine(keyword, pattern);
        let threshold = self.threshold(keyword_count);

        Score {
            keyword,
            pattern,
            combined,
            threshold,
            accepted: combined >= threshold,
        }
    }
}

impl std::fmt::Display for Calibration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted combination of the two confidences, capped at 1.0.
pub fn combine(keyword_confidence: f64, pattern_confidence: f64) -> f64 {
    (keyword_confidence * KEYWORD_WEIGHT + pattern_confidence * PATTERN_WEIGHT).min(1.0)
}

/// Per-stage confidences and the verdict they produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub keyword: f64,
    pub pattern: f64,
    pub combined: f64,
    pub threshold: f64,
    pub accepted: bool,
}

/// Render a 10-character bar for a confidence in `[0, 1]`.
pub fn confidence_bar(confidence: f64) -> String {
    let filled = ((confidence * 10.0).round() as usize).min(10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_graduated_keyword_steps() {
        let c = Calibration::Graduated;
        let expected = [
            (0, 0.0),
            (1, 0.4),
            (2, 0.65),
            (3, 0.85),
            (4, 0.85),
            (5, 0.9),
            (7, 0.9),
            (8, 0.95),
            (40, 0.95),
        ];
        for (count, value) in expected {
            assert_eq!(c.keyword_confidence(count), value, "count {count}");
        }
    }

    #[test]
    fn test_legacy_keyword_steps() {
        let c = Calibration::Legacy;
        let expected = [(0, 0.0), (1, 0.3), (2, 0.6), (3, 0.85), (4, 0.85), (5, 0.95)];
        for (count, value) in expected {
            assert_eq!(c.keyword_confidence(count), value, "count {count}");
        }
    }

    #[test]
    fn test_pattern_steps() {
        let g = Calibration::Graduated;
        assert_eq!(g.pattern_confidence(0), 0.0);
        assert_eq!(g.pattern_confidence(1), 0.7);
        assert_eq!(g.pattern_confidence(2), 0.85);
        assert_eq!(g.pattern_confidence(3), 0.9);
        assert_eq!(g.pattern_confidence(10), 0.9);

        let l = Calibration::Legacy;
        assert_eq!(l.pattern_confidence(0), 0.0);
        assert_eq!(l.pattern_confidence(1), 0.7);
        assert_eq!(l.pattern_confidence(2), 0.9);
    }

    #[test]
    fn test_graduated_thresholds() {
        let c = Calibration::Graduated;
        assert_eq!(c.threshold(0), 0.85);
        assert_eq!(c.threshold(2), 0.85);
        assert_eq!(c.threshold(3), 0.80);
        assert_eq!(c.threshold(5), 0.78);
        assert_eq!(c.threshold(8), 0.75);
        assert_eq!(c.threshold(100), 0.75);
    }

    #[test]
    fn test_legacy_threshold_is_fixed() {
        for count in 0..20 {
            assert_eq!(Calibration::Legacy.threshold(count), 0.80);
        }
    }

    #[test]
    fn test_monotonicity() {
        for calibration in [Calibration::Graduated, Calibration::Legacy] {
            for patterns in 0..5 {
                for keywords in 0..20 {
                    let lower = calibration.score(keywords, patterns);
                    let higher = calibration.score(keywords + 1, patterns);
                    assert!(higher.keyword >= lower.keyword);
                    assert!(higher.combined >= lower.combined);
                    assert!(higher.threshold <= lower.threshold);
                }
            }
        }
    }

    #[test]
    fn test_combined_is_bounded() {
        for calibration in [Calibration::Graduated, Calibration::Legacy] {
            for keywords in 0..20 {
                for patterns in 0..12 {
                    let score = calibration.score(keywords, patterns);
                    assert!((0.0..=1.0).contains(&score.combined));
                }
            }
        }
    }

    #[test]
    fn test_combine_formula() {
        assert!((combine(0.85, 0.7) - 0.805).abs() < EPSILON);
        assert!((combine(0.95, 0.0) - 0.665).abs() < EPSILON);
        assert_eq!(combine(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_keywords_alone_cannot_reach_threshold() {
        let score = Calibration::Graduated.score(9, 0);
        assert!((score.combined - 0.665).abs() < EPSILON);
        assert!(!score.accepted);
    }

    #[test]
    fn test_strong_evidence_accepted() {
        let score = Calibration::Graduated.score(9, 1);
        assert!((score.combined - 0.875).abs() < EPSILON);
        assert_eq!(score.threshold, 0.75);
        assert!(score.accepted);
    }

    #[test]
    fn test_calibrations_differ_in_confidence() {
        let graduated = Calibration::Graduated.score(5, 1);
        let legacy = Calibration::Legacy.score(5, 1);
        assert!((graduated.combined - 0.84).abs() < EPSILON);
        assert!((legacy.combined - 0.875).abs() < EPSILON);
        assert_eq!(graduated.threshold, 0.78);
        assert_eq!(legacy.threshold, 0.80);
        assert!(graduated.accepted);
        assert!(legacy.accepted);
    }

    #[test]
    fn test_two_keywords_never_accepted() {
        for patterns in 0..12 {
            assert!(!Calibration::Graduated.score(2, patterns).accepted);
            assert!(!Calibration::Legacy.score(2, patterns).accepted);
        }
    }

    #[test]
    fn test_calibration_serde() {
        assert_eq!(
            serde_json::to_string(&Calibration::Legacy).unwrap(),
            "\"legacy\""
        );
        let parsed: Calibration = serde_json::from_str("\"graduated\"").unwrap();
        assert_eq!(parsed, Calibration::Graduated);
    }

    #[test]
    fn test_confidence_bar() {
        assert_eq!(confidence_bar(0.0), "░░░░░░░░░░");
        assert_eq!(confidence_bar(0.5), "█████░░░░░");
        assert_eq!(confidence_bar(1.0), "██████████");
        assert_eq!(confidence_bar(0.805), "████████░░");
    }
}
