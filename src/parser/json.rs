//! JSON content parser.
//!
//! Datasets embedded in JSON are located by a depth-first search for arrays
//! whose first element is an object. Every such array contributes its first
//! element's keys to the header set and up to `max_rows` sample rows.

use super::traits::{DatasetFormat, DatasetParser, ParsedTable};
use crate::error::{DsAuditError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::trace;

/// Parser for JSON datasets.
pub struct JsonParser {
    max_rows: usize,
    max_depth: usize,
}

impl JsonParser {
    pub fn new(max_rows: usize, max_depth: usize) -> Self {
        Self {
            max_rows,
            max_depth,
        }
    }

    /// Parse JSON content to a Value. Nesting depth is unbounded here; the
    /// dataset search applies its own depth cap.
    pub fn parse_value(content: &str, name: &str) -> Result<Value> {
        let mut deserializer = serde_json::Deserializer::from_str(content);
        deserializer.disable_recursion_limit();

        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
            .and_then(|value| deserializer.end().map(|()| value))
            .map_err(|e| DsAuditError::json_format_error(name, e))?;

        Ok(value)
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new(super::MAX_SAMPLE_ROWS, super::MAX_JSON_DEPTH)
    }
}

impl DatasetParser for JsonParser {
    fn format(&self) -> DatasetFormat {
        DatasetFormat::Json
    }

    fn parse(&self, content: &str, name: &str) -> Result<ParsedTable> {
        let value = Self::parse_value(content, name)?;

        let mut collector = DatasetCollector::new(self.max_rows, self.max_depth);
        collector.visit(&value, 0);
        trace!(
            file = name,
            arrays = collector.arrays,
            headers = collector.headers.len(),
            rows = collector.rows.len(),
            "Collected JSON dataset arrays"
        );

        Ok(ParsedTable {
            format: DatasetFormat::Json,
            headers: collector.headers,
            sample_rows: collector.rows,
            raw_text: content.to_lowercase(),
        })
    }
}

struct DatasetCollector {
    max_rows: usize,
    max_depth: usize,
    headers: Vec<String>,
    seen: HashSet<String>,
    rows: Vec<String>,
    arrays: usize,
}

impl DatasetCollector {
    fn new(max_rows: usize, max_depth: usize) -> Self {
        Self {
            max_rows,
            max_depth,
            headers: Vec::new(),
            seen: HashSet::new(),
            rows: Vec::new(),
            arrays: 0,
        }
    }

    fn visit(&mut self, value: &Value, depth: usize) {
        if depth > self.max_depth {
            return;
        }

        match value {
            Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
                self.collect(items);
            }
            Value::Array(items) => {
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            Value::Object(map) => {
                for child in map.values() {
                    self.visit(child, depth + 1);
                }
            }
            _ => {}
        }
    }

    fn collect(&mut self, items: &[Value]) {
        self.arrays += 1;

        if let Some(Value::Object(first)) = items.first() {
            for key in first.keys() {
                let header = key.to_lowercase();
                if self.seen.insert(header.clone()) {
                    self.headers.push(header);
                }
            }
        }

        self.rows.extend(items.iter().take(self.max_rows).map(render_row));
    }
}

/// One record as a single text blob.
fn render_row(item: &Value) -> String {
    match item {
        Value::Object(map) => map.values().map(render_value).collect::<Vec<_>>().join(" "),
        other => render_value(other),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ParsedTable {
        JsonParser::default().parse(content, "test.json").unwrap()
    }

    #[test]
    fn test_top_level_array_of_objects() {
        let table = parse(r#"[{"Src_Bytes": 500, "flag": "SF"}, {"Src_Bytes": 0, "flag": "S0"}]"#);
        assert_eq!(table.headers, vec!["src_bytes", "flag"]);
        assert_eq!(table.sample_rows, vec!["500 SF", "0 S0"]);
        assert_eq!(table.format, DatasetFormat::Json);
    }

    #[test]
    fn test_nested_records_array() {
        let table = parse(
            r#"{"metadata": {"source": "lab"}, "records": [{"src_bytes": 500, "flag": "S0", "service": "http"}]}"#,
        );
        assert_eq!(table.headers, vec!["src_bytes", "flag", "service"]);
        assert_eq!(table.sample_rows, vec!["500 S0 http"]);
    }

    #[test]
    fn test_multiple_arrays_merge() {
        let table = parse(
            r#"{"train": [{"duration": 1, "service": "ftp"}], "test": {"rows": [{"service": "ssh", "land": 0}]}}"#,
        );
        assert_eq!(table.headers, vec!["duration", "service", "land"]);
        assert_eq!(table.sample_rows, vec!["1 ftp", "ssh 0"]);
    }

    #[test]
    fn test_row_cap_per_array() {
        let rows: Vec<String> = (0..300).map(|i| format!(r#"{{"id": {i}}}"#)).collect();
        let content = format!(r#"{{"a": [{}], "b": [{}]}}"#, rows.join(","), rows.join(","));
        let table = parse(&content);
        assert_eq!(table.sample_rows.len(), 400);
    }

    #[test]
    fn test_no_dataset_array() {
        let table = parse(r#"{"name": "capture", "values": [1, 2, 3]}"#);
        assert!(table.is_empty());
        assert!(table.raw_text.contains("capture"));
    }

    #[test]
    fn test_arrays_of_arrays_are_searched() {
        let table = parse(r#"[[{"port": 22}]]"#);
        assert_eq!(table.headers, vec!["port"]);
        assert_eq!(table.sample_rows, vec!["22"]);
    }

    #[test]
    fn test_value_rendering() {
        let table = parse(r#"[{"a": null, "b": true, "c": [1, 2], "d": {"e": "f"}}]"#);
        assert_eq!(table.sample_rows, vec![r#" true [1,2] {"e":"f"}"#]);
    }

    #[test]
    fn test_depth_cap() {
        let mut content = String::from(r#"[{"deep": 1}]"#);
        for _ in 0..60 {
            content = format!(r#"{{"n": {content}}}"#);
        }
        assert!(parse(&content).is_empty());

        let shallow = JsonParser::new(200, 100).parse(&content, "deep.json").unwrap();
        assert_eq!(shallow.headers, vec!["deep"]);
    }

    #[test]
    fn test_nesting_beyond_serde_default_limit() {
        let deep = format!("{}{}", "[".repeat(500), "]".repeat(500));
        let content = format!(r#"{{"records": [{{"src_ip": "10.0.0.1"}}], "deep": {deep}}}"#);

        let table = parse(&content);
        assert_eq!(table.headers, vec!["src_ip"]);
        assert_eq!(table.sample_rows, vec!["10.0.0.1"]);
    }

    #[test]
    fn test_trailing_content_is_format_error() {
        let err = JsonParser::default()
            .parse(r#"[{"a": 1}] extra"#, "trailing.json")
            .unwrap_err();
        assert!(matches!(err, DsAuditError::Format { .. }));
    }

    #[test]
    fn test_invalid_json_is_format_error() {
        let err = JsonParser::default()
            .parse("{\"records\": [", "broken.json")
            .unwrap_err();
        assert!(matches!(
            err,
            DsAuditError::Format {
                format: DatasetFormat::Json,
                ..
            }
        ));
        assert!(err.to_string().contains("broken.json"));
    }
}
