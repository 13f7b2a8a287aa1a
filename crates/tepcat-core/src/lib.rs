pub mod config;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod ingest;
pub mod output;

pub use config::SourceConfig;
pub use envelope::{DatasetEnvelope, FetchStamp};
pub use error::{IngestError, Result};
pub use fetch::{HttpFetcher, SourceFetcher, SourceLocation};
pub use ingest::{run_ingest, IngestRequest};
pub use output::{export, render_json};
