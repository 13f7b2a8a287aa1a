use std::fmt;
use std::str::FromStr;

use crate::errors::ParserError;
use crate::formats::{AsciiTableParser, CsvTableParser};
use crate::model::{ErrorMargins, Record};

pub trait SourceParser {
    fn name(&self) -> &'static str;
    fn parse(&self, lines: &[String], margins: ErrorMargins) -> Result<Vec<Record>, ParserError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceFormat {
    #[default]
    Ascii,
    Csv,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Ascii => "ascii",
            SourceFormat::Csv => "csv",
        }
    }

    pub fn parser(&self) -> &'static dyn SourceParser {
        static ASCII: AsciiTableParser = AsciiTableParser;
        static CSV: CsvTableParser = CsvTableParser;
        match self {
            SourceFormat::Ascii => &ASCII,
            SourceFormat::Csv => &CSV,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(SourceFormat::Ascii),
            "csv" => Ok(SourceFormat::Csv),
            other => Err(format!("unknown source format '{other}'")),
        }
    }
}

/// Parse a whole source document, already split into lines.
pub fn parse_source(
    format: SourceFormat,
    lines: &[String],
    margins: ErrorMargins,
) -> Result<Vec<Record>, ParserError> {
    format.parser().parse(lines, margins)
}
