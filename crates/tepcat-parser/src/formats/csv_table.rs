use tracing::debug;

use crate::errors::ParserError;
use crate::model::{ErrorMargins, Record};
use crate::registry::SourceParser;

use super::parse_whitespace_rows;

/// Comma-separated catalogue (`allplanets-csv.csv`).
///
/// The first line is a header and is always dropped. Commas are turned into
/// spaces and the rows then go through the whitespace parser, so values must
/// not contain commas or whitespace of their own.
pub struct CsvTableParser;

impl Default for CsvTableParser {
    fn default() -> Self {
        Self
    }
}

impl CsvTableParser {
    const NAME: &'static str = "TEPCAT_CSV";

    pub(crate) fn normalize_row(line: &str) -> String {
        line.replace(',', " ")
    }
}

impl SourceParser for CsvTableParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(&self, lines: &[String], margins: ErrorMargins) -> Result<Vec<Record>, ParserError> {
        let rows = lines.iter().skip(1).map(|line| Self::normalize_row(line));
        // Header occupies line 1.
        let records = parse_whitespace_rows(Self::NAME, rows, margins, 2)?;
        debug!(
            parser = Self::NAME,
            lines = lines.len(),
            records = records.len(),
            "parsed csv catalogue"
        );
        Ok(records)
    }
}
