use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use comfy_table::Table;
use tepcat_plot::{
    render_histogram, render_overview, series, Histogram, ImageKind, LoadedDataset, Summary,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plot orbital periods from an exported TEPCat dataset",
    long_about = None
)]
struct Cli {
    /// Dataset written by `tepcat --export`
    #[arg(default_value = "export.txt")]
    input: PathBuf,

    /// Directory for the rendered figures
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = FigureFormat::Png)]
    format: FigureFormat,

    /// Number of histogram bins
    #[arg(long, default_value_t = 50)]
    bins: usize,

    /// Seed for the shuffled panel (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Also write histogram bins to this CSV file
    #[arg(long)]
    bins_csv: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FigureFormat {
    Png,
    Svg,
}

impl From<FigureFormat> for ImageKind {
    fn from(value: FigureFormat) -> Self {
        match value {
            FigureFormat::Png => ImageKind::Png,
            FigureFormat::Svg => ImageKind::Svg,
        }
    }
}

fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["planets", "mean (d)", "stdev (d)", "min (d)", "max (d)"]);
    table.add_row(vec![
        summary.count.to_string(),
        format!("{:.4}", summary.mean),
        summary
            .stdev
            .map(|s| format!("{s:.4}"))
            .unwrap_or_else(|| "n/a".to_string()),
        format!("{:.4}", summary.min),
        format!("{:.4}", summary.max),
    ]);
    table
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let kind = ImageKind::from(cli.format);

    let dataset = LoadedDataset::load(&cli.input)
        .with_context(|| format!("failed to load '{}'", cli.input.display()))?;

    println!("{}", serde_json::to_string_pretty(&dataset.metadata)?);
    if let Some(first) = dataset.records.first() {
        println!("{}", serde_json::to_string_pretty(first)?);
    }

    let periods = dataset.periods().context("dataset has unusable periods")?;
    let summary = Summary::of(&periods).context("nothing to plot")?;
    println!("{}", summary_table(&summary));

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, bins = cli.bins, "rendering figures");
    let shuffled = series::shuffled(&periods, seed);
    let sorted = series::sorted(&periods);
    let histogram = Histogram::build(&periods, cli.bins).context("failed to bin periods")?;

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create '{}'", cli.out_dir.display()))?;

    let overview_path = cli
        .out_dir
        .join(format!("orbital-periods.{}", kind.extension()));
    render_overview(&overview_path, kind, &periods, &shuffled, &sorted)?;
    info!(path = %overview_path.display(), "wrote period overview");

    let histogram_path = cli
        .out_dir
        .join(format!("orbital-period-histogram.{}", kind.extension()));
    render_histogram(&histogram_path, kind, &histogram, &summary)?;
    info!(path = %histogram_path.display(), "wrote histogram");

    if let Some(path) = &cli.bins_csv {
        let file = File::create(path)
            .with_context(|| format!("failed to create '{}'", path.display()))?;
        histogram.write_csv(file)?;
        info!(path = %path.display(), "wrote histogram bins");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_export_workflow() {
        let cli = Cli::try_parse_from(["tepcat-plot"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("export.txt"));
        assert_eq!(cli.bins, 50);
        assert_eq!(cli.format, FigureFormat::Png);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "tepcat-plot", "data.json", "--out-dir", "figs", "--format", "svg", "--bins", "20",
            "--seed", "42", "--bins-csv", "bins.csv",
        ])
        .unwrap();
        assert_eq!(ImageKind::from(cli.format), ImageKind::Svg);
        assert_eq!(cli.bins, 20);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.bins_csv, Some(PathBuf::from("bins.csv")));
    }

    #[test]
    fn table_shows_missing_stdev() {
        let summary = Summary::of(&[4.0]).unwrap();
        let rendered = summary_table(&summary).to_string();
        assert!(rendered.contains("n/a"));
        assert!(rendered.contains("4.0000"));
    }
}
