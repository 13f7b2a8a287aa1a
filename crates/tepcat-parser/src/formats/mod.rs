mod ascii_table;
mod common;
mod csv_table;
pub mod schema;

pub use ascii_table::AsciiTableParser;
pub use csv_table::CsvTableParser;

pub(crate) use common::parse_whitespace_rows;
