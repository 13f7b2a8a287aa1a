use std::path::{Path, PathBuf};

use tepcat_core::fetch::{SourceFetcher, SourceLocation};
use tepcat_core::{
    render_json, run_ingest, FetchStamp, HttpFetcher, IngestError, IngestRequest, SourceConfig,
};
use tepcat_parser::{ErrorMargins, SourceFormat};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../tepcat-parser/tests/data")
        .join(name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("read fixture")
}

/// Serves a fixed document for any location.
struct StaticFetcher {
    body: String,
}

impl SourceFetcher for StaticFetcher {
    fn fetch(&self, _location: &SourceLocation) -> tepcat_core::Result<Vec<String>> {
        Ok(self.body.split('\n').map(str::to_string).collect())
    }
}

#[test]
fn local_file_ingest_uses_unknown_stamp() {
    let request = IngestRequest {
        format: SourceFormat::Ascii,
        from_file: Some(fixture_path("allplanets-ascii.txt")),
        margins: ErrorMargins::Keep,
    };
    let fetcher = HttpFetcher::new().unwrap();
    let envelope = run_ingest(&SourceConfig::default(), &fetcher, &request).unwrap();

    assert_eq!(envelope.fetched, FetchStamp::unknown());
    assert_eq!(envelope.data.len(), 3);
    assert_eq!(envelope.units_info, tepcat_core::config::UNITS_URL);

    let text = render_json(&envelope).unwrap();
    assert!(text.starts_with("{\n    \"fetched_date_human\": \"unknown\",\n    \"fetched_date_unix\": 0,"));
}

#[test]
fn local_csv_matches_local_ascii() {
    let fetcher = HttpFetcher::new().unwrap();
    let config = SourceConfig::default();
    let ascii = run_ingest(
        &config,
        &fetcher,
        &IngestRequest {
            format: SourceFormat::Ascii,
            from_file: Some(fixture_path("allplanets-ascii.txt")),
            margins: ErrorMargins::Skip,
        },
    )
    .unwrap();
    let csv = run_ingest(
        &config,
        &fetcher,
        &IngestRequest {
            format: SourceFormat::Csv,
            from_file: Some(fixture_path("allplanets-csv.csv")),
            margins: ErrorMargins::Skip,
        },
    )
    .unwrap();
    assert_eq!(render_json(&ascii).unwrap(), render_json(&csv).unwrap());
}

#[test]
fn missing_local_file_is_fatal() {
    let request = IngestRequest {
        from_file: Some(PathBuf::from("/no/such/catalogue.txt")),
        ..IngestRequest::default()
    };
    let fetcher = HttpFetcher::new().unwrap();
    let err = run_ingest(&SourceConfig::default(), &fetcher, &request).unwrap_err();
    assert!(matches!(err, IngestError::ReadSource { .. }));
}

#[test]
fn remote_ingest_is_stamped_and_uses_configured_url() {
    let config = SourceConfig {
        units_url: "http://units.example/".to_string(),
        ..SourceConfig::default()
    };
    let request = IngestRequest::default();
    assert_eq!(
        request.location(&config),
        SourceLocation::Remote(tepcat_core::config::ASCII_URL.to_string())
    );

    let fetcher = StaticFetcher {
        body: fixture("allplanets-ascii.txt"),
    };
    let envelope = run_ingest(&config, &fetcher, &request).unwrap();
    assert!(envelope.fetched.is_known());
    assert!(envelope.fetched.unix_seconds() > 0);
    assert_eq!(envelope.units_info, "http://units.example/");
}

#[test]
fn malformed_row_aborts_whole_run() {
    let mut body = fixture("allplanets-ascii.txt");
    body.push_str("BROKEN-1 1 2 3\n");
    let fetcher = StaticFetcher { body };
    let err = run_ingest(&SourceConfig::default(), &fetcher, &IngestRequest::default())
        .unwrap_err();
    assert!(matches!(err, IngestError::Parse(_)));
}
