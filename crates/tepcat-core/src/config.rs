//! Source locations for the catalogue.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then the
//! `TEPCAT_*` environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tepcat_parser::SourceFormat;
use tracing::debug;

use crate::error::{IngestError, Result};

pub const ASCII_URL: &str = "https://www.astro.keele.ac.uk/jkt/tepcat/allplanets-ascii.txt";
pub const CSV_URL: &str = "https://www.astro.keele.ac.uk/jkt/tepcat/allplanets-csv.csv";
pub const UNITS_URL: &str = "https://www.astro.keele.ac.uk/jkt/tepcat/html-quantities.html";

pub const ASCII_URL_ENV: &str = "TEPCAT_ASCII_URL";
pub const CSV_URL_ENV: &str = "TEPCAT_CSV_URL";
pub const UNITS_URL_ENV: &str = "TEPCAT_UNITS_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub ascii_url: String,
    pub csv_url: String,
    pub units_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            ascii_url: ASCII_URL.to_string(),
            csv_url: CSV_URL.to_string(),
            units_url: UNITS_URL.to_string(),
        }
    }
}

impl SourceConfig {
    /// Remote document for a catalogue format.
    pub fn url_for(&self, format: SourceFormat) -> &str {
        match format {
            SourceFormat::Ascii => &self.ascii_url,
            SourceFormat::Csv => &self.csv_url,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| IngestError::Config(err.to_string()))
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            IngestError::Config(format!(
                "failed to read config file '{}': {err}",
                path.display()
            ))
        })?;
        toml::from_str(&content).map_err(|err| {
            IngestError::Config(format!("invalid config file '{}': {err}", path.display()))
        })
    }

    /// Replace values for which `lookup` returns a non-empty string.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets = [
            (ASCII_URL_ENV, &mut self.ascii_url),
            (CSV_URL_ENV, &mut self.csv_url),
            (UNITS_URL_ENV, &mut self.units_url),
        ];
        for (key, slot) in targets {
            if let Some(value) = lookup(key).filter(|value| !value.trim().is_empty()) {
                debug!(key, value = %value, "config override");
                *slot = value;
            }
        }
        self
    }

    /// Defaults, optional TOML file, then process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }
}
