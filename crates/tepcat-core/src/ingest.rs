use std::path::PathBuf;

use tepcat_parser::{parse_source, ErrorMargins, SourceFormat};
use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::envelope::DatasetEnvelope;
use crate::error::Result;
use crate::fetch::{SourceFetcher, SourceLocation};

/// What one ingestion run should read and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestRequest {
    pub format: SourceFormat,
    /// Read this file instead of fetching the remote catalogue.
    pub from_file: Option<PathBuf>,
    pub margins: ErrorMargins,
}

impl IngestRequest {
    pub fn location(&self, config: &SourceConfig) -> SourceLocation {
        match &self.from_file {
            Some(path) => SourceLocation::Local(path.clone()),
            None => SourceLocation::Remote(config.url_for(self.format).to_string()),
        }
    }
}

/// Fetch, parse and wrap the catalogue. Only remote sources get a fetch time.
pub fn run_ingest(
    config: &SourceConfig,
    fetcher: &dyn SourceFetcher,
    request: &IngestRequest,
) -> Result<DatasetEnvelope> {
    let location = request.location(config);
    let lines = fetcher.fetch(&location)?;
    let records = parse_source(request.format, &lines, request.margins)?;
    info!(
        parser = request.format.parser().name(),
        format = %request.format,
        margins = %request.margins,
        source = %location,
        records = records.len(),
        "catalogue parsed"
    );
    let envelope = DatasetEnvelope::build(records, location.is_remote(), config.units_url.clone());
    debug!(
        stamped = envelope.fetched.is_known(),
        fetched_unix = envelope.fetched.unix_seconds(),
        "envelope built"
    );
    Ok(envelope)
}
