//! Content parsing layer.
//!
//! Turns raw dataset text into a [`ParsedTable`]:
//! - JSON (`.json`): depth-first search for embedded arrays of objects
//! - CSV (everything else): header row plus a bounded number of records

pub mod csv;
pub mod json;
pub mod traits;

pub use csv::{CsvDocument, CsvParser, CsvRecord, split_fields};
pub use json::JsonParser;
pub use traits::{
    DatasetFormat, DatasetParser, MAX_JSON_DEPTH, MAX_SAMPLE_ROWS, ParseLimits, ParsedTable,
};

use crate::error::Result;

/// The CSV and JSON parsers configured with the same limits.
pub struct ParserRegistry {
    csv: CsvParser,
    json: JsonParser,
}

impl ParserRegistry {
    pub fn new(limits: ParseLimits) -> Self {
        Self {
            csv: CsvParser::new(limits.max_sample_rows),
            json: JsonParser::new(limits.max_sample_rows, limits.max_json_depth),
        }
    }

    /// The parser responsible for a declared extension.
    pub fn for_extension(&self, ext: &str) -> &dyn DatasetParser {
        match DatasetFormat::from_extension(ext) {
            DatasetFormat::Json => &self.json,
            DatasetFormat::Csv => &self.csv,
        }
    }

    /// Parse content using the parser for `ext`.
    pub fn parse(&self, content: &str, ext: &str, name: &str) -> Result<ParsedTable> {
        self.for_extension(ext).parse(content, name)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new(ParseLimits::default())
    }
}
