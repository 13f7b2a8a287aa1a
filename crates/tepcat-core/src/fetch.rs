//! Retrieval of the raw catalogue document.

use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use tracing::{info, warn};

use crate::error::{IngestError, Result};

/// Where the source document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Remote(String),
    Local(PathBuf),
}

impl SourceLocation {
    pub fn is_remote(&self) -> bool {
        matches!(self, SourceLocation::Remote(_))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Remote(url) => f.write_str(url),
            SourceLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

pub trait SourceFetcher {
    /// Return the whole document split on `\n`.
    fn fetch(&self, location: &SourceLocation) -> Result<Vec<String>>;
}

/// Blocking HTTP/file fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(Client::builder().build()?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn fetch_remote(&self, raw_url: &str) -> Result<String> {
        let url = Url::parse(raw_url).map_err(|err| IngestError::InvalidUrl {
            url: raw_url.to_string(),
            message: err.to_string(),
        })?;
        fetch_with_fallback(&url, |target: &Url| -> reqwest::Result<(StatusCode, String)> {
            let response = self.client.get(target.clone()).send()?;
            let status = response.status();
            Ok((status, response.text()?))
        })
    }
}

/// Issue `send` for `url`; when TLS verification fails on an https URL, retry
/// once over plain http. Every other failure is returned as is.
pub(crate) fn fetch_with_fallback<E, F>(url: &Url, mut send: F) -> Result<String>
where
    E: StdError + 'static,
    IngestError: From<E>,
    F: FnMut(&Url) -> std::result::Result<(StatusCode, String), E>,
{
    match send(url) {
        Ok((status, body)) => check_status(url, status, body),
        Err(err) if is_certificate_error(&err) => {
            let Some(fallback) = downgrade_to_http(url) else {
                return Err(err.into());
            };
            warn!(
                url = %url,
                fallback = %fallback,
                "couldn't verify TLS certificate, using plain http as fallback"
            );
            let (status, body) = send(&fallback)?;
            check_status(&fallback, status, body)
        }
        Err(err) => Err(err.into()),
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self, location: &SourceLocation) -> Result<Vec<String>> {
        let text = match location {
            SourceLocation::Remote(url) => {
                info!(url = %url, "fetching catalogue");
                self.fetch_remote(url)?
            }
            SourceLocation::Local(path) => {
                info!(path = %path.display(), "reading catalogue from file");
                std::fs::read_to_string(path).map_err(|source| IngestError::ReadSource {
                    path: path.clone(),
                    source,
                })?
            }
        };
        Ok(split_lines(&text))
    }
}

fn check_status(url: &Url, status: StatusCode, body: String) -> Result<String> {
    if status != StatusCode::OK {
        return Err(IngestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(body)
}

pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Whether an underlying cause reports a certificate problem. The outer error
/// is skipped since reqwest puts the request URL in its message.
pub(crate) fn is_certificate_error(err: &(dyn StdError + 'static)) -> bool {
    let mut current = err.source();
    while let Some(cause) = current {
        if cause.to_string().to_ascii_lowercase().contains("certificate") {
            return true;
        }
        current = cause.source();
    }
    false
}

/// Same host and path over plain http, for https URLs only.
pub(crate) fn downgrade_to_http(url: &Url) -> Option<Url> {
    if url.scheme() != "https" {
        return None;
    }
    let mut fallback = url.clone();
    fallback.set_scheme("http").ok()?;
    Some(fallback)
}
