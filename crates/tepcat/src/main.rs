use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tepcat_core::{export, render_json, run_ingest, HttpFetcher, IngestRequest, SourceConfig};
use tepcat_parser::{ErrorMargins, SourceFormat};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert source exoplanet (transit) data into JSON",
    long_about = None
)]
struct Cli {
    /// Fetch source from file (instead of web)
    #[arg(short = 'f', long = "from-file")]
    from_file: Option<PathBuf>,

    /// Source type (ascii or csv)
    #[arg(short = 't', long = "type", default_value_t = SourceFormat::Ascii)]
    source_type: SourceFormat,

    /// Skip error margins (+/-) for each data point
    #[arg(short = 's', long = "skip-errors")]
    skip_errors: bool,

    /// Export output to file
    #[arg(short = 'e', long)]
    export: Option<PathBuf>,

    /// Don't print output to stdout
    #[arg(short = 'q', long)]
    quiet: bool,

    /// TOML file overriding the catalogue URLs
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn request(&self) -> IngestRequest {
        IngestRequest {
            format: self.source_type,
            from_file: self.from_file.clone(),
            margins: ErrorMargins::from_skip(self.skip_errors),
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let config = SourceConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let fetcher = HttpFetcher::new().context("failed to build HTTP client")?;
    let envelope = run_ingest(&config, &fetcher, &cli.request()).context("ingestion failed")?;
    let formatted = render_json(&envelope).context("failed to render dataset")?;

    if !cli.quiet {
        println!("{formatted}");
    }
    if let Some(path) = &cli.export {
        export(&formatted, path)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        println!("written to file: {}", path.display());
    }

    Ok(())
}
