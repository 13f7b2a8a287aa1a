//! Reading a dataset written by the ingestion tool.
//!
//! Only `period` is required per record, so files exported with or without
//! error margins load the same way.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{PlotError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    /// Top-level object with `data` removed.
    pub metadata: Map<String, Value>,
    pub records: Vec<Value>,
}

impl LoadedDataset {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let mut root: Map<String, Value> = serde_json::from_str(text)?;
        let Some(Value::Array(records)) = root.shift_remove("data") else {
            return Err(PlotError::MissingData);
        };
        Ok(Self {
            metadata: root,
            records,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Orbital periods in dataset order.
    pub fn periods(&self) -> Result<Vec<f64>> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .get("period")
                    .and_then(Value::as_f64)
                    .ok_or(PlotError::InvalidPeriod { index })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_metadata_from_records() {
        let dataset = LoadedDataset::from_json_str(
            r#"{"fetched_date_human": "unknown", "fetched_date_unix": 0,
                "units_info": "http://units", "data": [{"system": "A", "period": 2.5}]}"#,
        )
        .unwrap();
        let keys: Vec<&str> = dataset.metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, ["fetched_date_human", "fetched_date_unix", "units_info"]);
        assert_eq!(dataset.periods().unwrap(), vec![2.5]);
    }

    #[test]
    fn periods_ignore_measurement_shape() {
        let dataset = LoadedDataset::from_json_str(
            r#"{"data": [
                {"period": 1.0, "eccentricity": 0.1},
                {"period": 3.0, "eccentricity": {"value": 0.1, "error_plus": 0.0, "error_minus": 0.0}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(dataset.periods().unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn missing_data_is_an_error() {
        let err = LoadedDataset::from_json_str(r#"{"units_info": "x"}"#).unwrap_err();
        assert!(matches!(err, PlotError::MissingData));
        let err = LoadedDataset::from_json_str(r#"{"data": {}}"#).unwrap_err();
        assert!(matches!(err, PlotError::MissingData));
    }

    #[test]
    fn non_numeric_period_names_record() {
        let dataset =
            LoadedDataset::from_json_str(r#"{"data": [{"period": 1.0}, {"period": "x"}]}"#)
                .unwrap();
        assert!(matches!(
            dataset.periods(),
            Err(PlotError::InvalidPeriod { index: 1 })
        ));
    }
}
