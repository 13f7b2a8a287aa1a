use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParserError {
    #[error("{parser} line {line_index}: expected {expected} fields but found {found}")]
    FieldCount {
        parser: &'static str,
        line_index: usize,
        expected: usize,
        found: usize,
    },

    #[error("{parser} data row {line_index} invalid: {message}")]
    DataRow {
        parser: &'static str,
        line_index: usize,
        message: String,
    },
}

impl ParserError {
    /// 1-based line of the source document the error refers to.
    pub fn line_index(&self) -> usize {
        match self {
            ParserError::FieldCount { line_index, .. } | ParserError::DataRow { line_index, .. } => {
                *line_index
            }
        }
    }
}
