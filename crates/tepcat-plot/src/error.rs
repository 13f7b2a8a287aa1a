use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset has no 'data' array")]
    MissingData,

    #[error("Record {index} has no numeric 'period'")]
    InvalidPeriod { index: usize },

    #[error("Dataset contains no records")]
    EmptyDataset,

    #[error("Histogram needs at least one bin")]
    InvalidBinCount,

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
