use tracing::debug;

use crate::errors::ParserError;
use crate::model::{ErrorMargins, Record};
use crate::registry::SourceParser;

use super::parse_whitespace_rows;

/// Whitespace-separated catalogue (`allplanets-ascii.txt`).
pub struct AsciiTableParser;

impl Default for AsciiTableParser {
    fn default() -> Self {
        Self
    }
}

impl AsciiTableParser {
    const NAME: &'static str = "TEPCAT_ASCII";
}

impl SourceParser for AsciiTableParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(&self, lines: &[String], margins: ErrorMargins) -> Result<Vec<Record>, ParserError> {
        let records = parse_whitespace_rows(Self::NAME, lines, margins, 1)?;
        debug!(
            parser = Self::NAME,
            lines = lines.len(),
            records = records.len(),
            "parsed ascii catalogue"
        );
        Ok(records)
    }
}
