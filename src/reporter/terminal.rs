use crate::classifier::ClassificationResult;
use crate::reporter::{ClassificationReport, FileClassification, Reporter};
use crate::rules::pattern_rule;
use crate::scoring::confidence_bar;
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn verdict_label(&self, result: &ClassificationResult) -> colored::ColoredString {
        if result.is_cybersecurity_related() {
            "ACCEPTED".green().bold()
        } else if result.error().is_some() {
            "NOT CLASSIFIED".red().bold()
        } else {
            "REJECTED".yellow().bold()
        }
    }

    fn format_patterns(&self, result: &ClassificationResult) -> String {
        result
            .matched_patterns()
            .iter()
            .map(|id| match pattern_rule(id) {
                Some(rule) => format!("{id} ({})", rule.name),
                None => id.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn format_file(&self, file: &FileClassification) -> String {
        let result = &file.result;
        let info = result.debug_info();
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            self.verdict_label(result),
            file.target.bold()
        ));

        if let Some(error) = result.error() {
            output.push_str(&format!("  {} {}\n", "error:".red(), error));
            return output;
        }

        let threshold = info
            .threshold
            .map(|t| format!(" (threshold {t:.2})"))
            .unwrap_or_default();
        output.push_str(&format!(
            "  confidence: {} {:.3}{}\n",
            confidence_bar(result.confidence()).cyan(),
            result.confidence(),
            threshold.dimmed()
        ));

        let keywords = result.matched_keywords();
        if keywords.is_empty() {
            output.push_str(&format!("  keywords: {}\n", "none".dimmed()));
        } else {
            output.push_str(&format!(
                "  keywords ({}): {}\n",
                keywords.len(),
                keywords.iter().cloned().collect::<Vec<_>>().join(", ")
            ));
        }

        if result.matched_patterns().is_empty() {
            output.push_str(&format!("  patterns: {}\n", "none".dimmed()));
        } else {
            output.push_str(&format!(
                "  patterns ({}): {}\n",
                result.matched_patterns().len(),
                self.format_patterns(result)
            ));
        }

        if self.verbose {
            let format = info.file_type.map(|f| f.as_str()).unwrap_or("-");
            output.push_str(&format!(
                "  {}\n",
                format!(
                    "format={} size={}B headers={} rows={} keyword_conf={:.2} pattern_conf={:.2} calibration={}",
                    format,
                    info.file_size,
                    info.analyzed_headers.len(),
                    info.sample_row_count,
                    info.keyword_confidence,
                    info.pattern_confidence,
                    info.calibration
                )
                .dimmed()
            ));
        }

        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &ClassificationReport) -> String {
        let mut output = String::new();

        for file in &report.results {
            output.push_str(&self.format_file(file));
            output.push('\n');
        }

        let summary = &report.summary;
        output.push_str(&format!(
            "Summary: {} file(s), {} accepted, {} rejected",
            summary.total, summary.accepted, summary.rejected
        ));
        if summary.errors > 0 {
            output.push_str(&format!(" ({} not classified)", summary.errors));
        }
        output.push('\n');

        let result_label = if summary.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        output.push_str(&format!("Result: {}\n", result_label));

        output
    }
}
