#[cfg(test)]
pub mod fixtures {
    use crate::classifier::{ClassificationResult, classify};
    use crate::input::DatasetSource;
    use crate::reporter::{ClassificationReport, FileClassification};
    use crate::scoring::Calibration;

    pub const KDD_CSV: &str = "duration,protocol_type,service,flag,src_bytes,dst_bytes,land,wrong_fragment,urgent\n\
                               0,tcp,http,SF,181,5450,0,0,0\n\
                               0,tcp,http,SF,239,486,0,0,0\n";

    pub const PEOPLE_CSV: &str = "name,age,city,salary\nalice,thirty,paris,high\n";

    pub fn accepted_result() -> ClassificationResult {
        classify(&DatasetSource::new("kdd.csv", KDD_CSV))
    }

    pub fn rejected_result() -> ClassificationResult {
        classify(&DatasetSource::new("people.csv", PEOPLE_CSV))
    }

    pub fn unreadable_result() -> ClassificationResult {
        classify(&DatasetSource::new("broken.json", "{\"records\": ["))
    }

    pub fn file(target: &str, result: ClassificationResult) -> FileClassification {
        FileClassification {
            target: target.to_string(),
            result,
        }
    }

    pub fn create_test_report(results: Vec<FileClassification>) -> ClassificationReport {
        ClassificationReport::new(Calibration::Graduated, results)
    }
}
