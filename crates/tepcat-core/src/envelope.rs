use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tepcat_parser::Record;

pub const UNKNOWN_FETCH_TIME: &str = "unknown";
/// Renders as e.g. `2017-Mar-05 14:03:22`.
pub const HUMAN_TIME_FORMAT: &str = "%Y-%b-%d %H:%M:%S";

/// When the catalogue was retrieved.
///
/// Local files carry no fetch time and use a distinct key pair holding the
/// `"unknown"` / `0` sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FetchStamp {
    Fetched {
        fetched_data_human_utc: String,
        fetched_data_unix_utc: i64,
    },
    Unknown {
        fetched_date_human: String,
        fetched_date_unix: i64,
    },
}

impl FetchStamp {
    /// Both representations come from the same instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        FetchStamp::Fetched {
            fetched_data_human_utc: instant.format(HUMAN_TIME_FORMAT).to_string(),
            fetched_data_unix_utc: instant.timestamp(),
        }
    }

    pub fn unknown() -> Self {
        FetchStamp::Unknown {
            fetched_date_human: UNKNOWN_FETCH_TIME.to_string(),
            fetched_date_unix: 0,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, FetchStamp::Fetched { .. })
    }

    pub fn unix_seconds(&self) -> i64 {
        match self {
            FetchStamp::Fetched {
                fetched_data_unix_utc,
                ..
            } => *fetched_data_unix_utc,
            FetchStamp::Unknown {
                fetched_date_unix, ..
            } => *fetched_date_unix,
        }
    }
}

/// Top-level document written by the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEnvelope {
    #[serde(flatten)]
    pub fetched: FetchStamp,
    pub units_info: String,
    pub data: Vec<Record>,
}

impl DatasetEnvelope {
    /// Wrap records; `stamp` captures the current UTC time once.
    pub fn build(data: Vec<Record>, stamp: bool, units_info: impl Into<String>) -> Self {
        let fetched = if stamp {
            FetchStamp::at(Utc::now())
        } else {
            FetchStamp::unknown()
        };
        Self {
            fetched,
            units_info: units_info.into(),
            data,
        }
    }

    pub fn stamped_at(
        data: Vec<Record>,
        instant: DateTime<Utc>,
        units_info: impl Into<String>,
    ) -> Self {
        Self {
            fetched: FetchStamp::at(instant),
            units_info: units_info.into(),
            data,
        }
    }
}
