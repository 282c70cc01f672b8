//! CSV content parser.
//!
//! Deliberately small: one record per line, comma separators, `"` toggling
//! quoted state and `\"` as a literal quote. Malformed lines are tolerated.

use super::traits::{DatasetFormat, DatasetParser, ParsedTable};
use crate::error::Result;

/// One data line keyed by the (lower-cased) header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    fields: Vec<(String, String)>,
}

impl CsvRecord {
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    /// Values joined by a single space, in header order.
    pub fn joined(&self) -> String {
        self.values().collect::<Vec<_>>().join(" ")
    }
}

/// Header row plus a bounded number of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvDocument {
    pub headers: Vec<String>,
    pub records: Vec<CsvRecord>,
}

/// Split one line into trimmed fields.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Parser for comma-separated datasets (and any unrecognised extension).
pub struct CsvParser {
    max_rows: usize,
}

impl CsvParser {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    /// Read the header row and up to `max_rows` records. Without at least
    /// one data line the document is empty, header row included.
    pub fn read_document(&self, content: &str) -> CsvDocument {
        let mut lines = content
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .peekable();

        let Some(header_line) = lines.next() else {
            return CsvDocument::default();
        };
        if lines.peek().is_none() {
            return CsvDocument::default();
        }

        // Repeated names collapse onto their first position; the last
        // column with that name supplies the value.
        let mut headers: Vec<String> = Vec::new();
        let mut columns: Vec<usize> = Vec::new();
        for (index, header) in split_fields(header_line).into_iter().enumerate() {
            let header = header.to_lowercase();
            match headers.iter().position(|h| *h == header) {
                Some(slot) => columns[slot] = index,
                None => {
                    headers.push(header);
                    columns.push(index);
                }
            }
        }

        let records = lines
            .take(self.max_rows)
            .map(|line| {
                let values = split_fields(line);
                let fields = headers
                    .iter()
                    .zip(&columns)
                    .map(|(header, &column)| {
                        (header.clone(), values.get(column).cloned().unwrap_or_default())
                    })
                    .collect();
                CsvRecord { fields }
            })
            .collect();

        CsvDocument { headers, records }
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(super::MAX_SAMPLE_ROWS)
    }
}

impl DatasetParser for CsvParser {
    fn format(&self) -> DatasetFormat {
        DatasetFormat::Csv
    }

    fn parse(&self, content: &str, _name: &str) -> Result<ParsedTable> {
        let document = self.read_document(content);
        let sample_rows = document.records.iter().map(CsvRecord::joined).collect();

        Ok(ParsedTable {
            format: DatasetFormat::Csv,
            headers: document.headers,
            sample_rows,
            raw_text: content.to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_fields() {
        assert_eq!(split_fields("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(split_fields(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_split_escaped_quote_does_not_toggle() {
        assert_eq!(
            split_fields(r#""say \"hi, there\"",x"#),
            vec![r#"say "hi, there""#, "x"]
        );
    }

    #[test]
    fn test_split_escaped_quote_outside_quotes() {
        assert_eq!(split_fields(r#"5\" disk,y"#), vec![r#"5" disk"#, "y"]);
    }

    #[test]
    fn test_split_trailing_empty_field() {
        assert_eq!(split_fields("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_quoted_comma_record() {
        let doc = CsvParser::default().read_document("x,y,z\na,\"b,c\",d\n");
        let values: Vec<_> = doc.records[0].values().collect();
        assert_eq!(values, vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_headers_lowercased_and_trimmed() {
        let doc = CsvParser::default().read_document(" Duration , SRC_Bytes\n1,2\n");
        assert_eq!(doc.headers, vec!["duration", "src_bytes"]);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let doc = CsvParser::default().read_document("a,b,c\n1\n");
        let record = &doc.records[0];
        assert_eq!(record.values().collect::<Vec<_>>(), vec!["1", "", ""]);
        assert_eq!(record.joined(), "1  ");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let doc = CsvParser::default().read_document("a,b\n1,2,3,4\n");
        assert_eq!(doc.records[0].values().count(), 2);
    }

    #[test]
    fn test_blank_lines_and_crlf_dropped() {
        let doc = CsvParser::default().read_document("a,b\r\n\r\n1,2\r\n\n3,4\r\n");
        assert_eq!(doc.records.len(), 2);
        assert_eq!(doc.records[1].joined(), "3 4");
    }

    #[test]
    fn test_row_cap() {
        let mut content = String::from("id,value\n");
        for i in 0..500 {
            content.push_str(&format!("{i},v{i}\n"));
        }
        let table = CsvParser::default().parse(&content, "big.csv").unwrap();
        assert_eq!(table.sample_rows.len(), 200);
        assert_eq!(table.sample_rows[199], "199 v199");
    }

    #[test]
    fn test_custom_row_cap() {
        let table = CsvParser::new(1).parse("a\n1\n2\n3\n", "t.csv").unwrap();
        assert_eq!(table.sample_rows, vec!["1"]);
    }

    #[test]
    fn test_empty_content() {
        let table = CsvParser::default().parse("", "empty.csv").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_header_only_content() {
        let content = "src_ip_addr,dst_ip_addr,attack_label\n";
        let table = CsvParser::default().parse(content, "h.csv").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.sample_rows.is_empty());
        assert_eq!(table.raw_text, content);
    }

    #[test]
    fn test_duplicate_headers_collapse() {
        let doc = CsvParser::default().read_document("ip,port,ip\n10.0.0.1,80,10.0.0.2\n");
        assert_eq!(doc.headers, vec!["ip", "port"]);
        assert_eq!(doc.records[0].joined(), "10.0.0.2 80");
    }

    #[test]
    fn test_raw_text_lowercased() {
        let table = CsvParser::default().parse("Protocol\nTCP\n", "p.csv").unwrap();
        assert_eq!(table.raw_text, "protocol\ntcp\n");
        assert_eq!(table.format, DatasetFormat::Csv);
    }
}
