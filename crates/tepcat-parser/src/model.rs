use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a parse run keeps the uncertainty columns next to each measured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMargins {
    #[default]
    Keep,
    Skip,
}

impl ErrorMargins {
    pub fn from_skip(skip_err_margins: bool) -> Self {
        if skip_err_margins {
            ErrorMargins::Skip
        } else {
            ErrorMargins::Keep
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorMargins::Keep => "keep",
            ErrorMargins::Skip => "skip",
        }
    }
}

impl fmt::Display for ErrorMargins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub error_plus: f64,
    pub error_minus: f64,
}

impl Measurement {
    pub fn new(value: f64, error_plus: f64, error_minus: f64) -> Self {
        Self {
            value,
            error_plus,
            error_minus,
        }
    }
}

/// A measured field as emitted by one parse run.
///
/// Serializes as a bare number when error margins were skipped, otherwise as
/// `{"value", "error_plus", "error_minus"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Value(f64),
    WithErrors(Measurement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StellarProperties {
    pub temp_k: Quantity,
    pub metal_log: Quantity,
    pub mass_sol: Quantity,
    pub radius_sol: Quantity,
    pub gravity_log_cgs: Quantity,
    pub density_sol: Quantity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryProperties {
    pub mass_jup: Quantity,
    pub radius_jup: Quantity,
    pub gravity: Quantity,
    pub density_jup: Quantity,
    pub temp_eq_k: Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct References {
    pub human_url: String,
    pub discovery: String,
    pub recent: String,
}

/// One planetary system entry. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub system: String,
    pub period: f64,
    pub eccentricity: Quantity,
    #[serde(rename = "semimajor_AU")]
    pub semimajor_au: Quantity,
    pub stellar_properties: StellarProperties,
    pub planetary_properties: PlanetaryProperties,
    pub references: References,
}
