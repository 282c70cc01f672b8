use crate::reporter::{ClassificationReport, Reporter};

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, report: &ClassificationReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize report: {}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{
        accepted_result, create_test_report, file, unreadable_result,
    };

    #[test]
    fn test_json_output_structure() {
        let reporter = JsonReporter::new();
        let output = reporter.report(&create_test_report(vec![]));

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["calibration"], "graduated");
        assert_eq!(parsed["summary"]["total"], 0);
        assert!(parsed["summary"]["passed"].as_bool().unwrap());
    }

    #[test]
    fn test_json_output_with_results() {
        let reporter = JsonReporter::new();
        let report = create_test_report(vec![
            file("data/kdd.csv", accepted_result()),
            file("data/broken.json", unreadable_result()),
        ]);
        let output = reporter.report(&report);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let first = &parsed["results"][0];
        assert_eq!(first["target"], "data/kdd.csv");
        assert_eq!(first["result"]["isCybersecurityRelated"], true);
        assert!(first["result"]["matchedKeywords"].as_array().unwrap().len() >= 8);

        let second = &parsed["results"][1];
        assert_eq!(second["result"]["confidence"], 0.0);
        assert!(second["result"]["debugInfo"]["error"].is_string());

        assert_eq!(parsed["summary"]["errors"], 1);
        assert!(!parsed["summary"]["passed"].as_bool().unwrap());
    }
}
