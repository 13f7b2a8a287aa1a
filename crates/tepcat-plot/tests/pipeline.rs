use std::path::PathBuf;

use tepcat_plot::{series, Histogram, LoadedDataset, Summary};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/export.txt")
}

#[test]
fn exported_dataset_loads_with_metadata() {
    let dataset = LoadedDataset::load(&fixture()).unwrap();
    assert_eq!(dataset.records.len(), 3);
    assert_eq!(
        dataset.metadata["fetched_data_unix_utc"],
        serde_json::json!(1488722602)
    );
    assert!(!dataset.metadata.contains_key("data"));
    assert_eq!(dataset.records[0]["system"], "CoRoT-01");
}

#[test]
fn periods_feed_every_view() {
    let periods = LoadedDataset::load(&fixture()).unwrap().periods().unwrap();
    assert_eq!(periods, vec![1.5089682, 4.46529976, 1.0914203]);

    assert_eq!(series::sorted(&periods), vec![1.0914203, 1.5089682, 4.46529976]);
    assert_eq!(series::shuffled(&periods, 3).len(), 3);

    let summary = Summary::of(&periods).unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.min, 1.0914203);
    assert_eq!(summary.max, 4.46529976);

    let histogram = Histogram::build(&periods, 50).unwrap();
    assert_eq!(histogram.total, 3);
    assert_eq!(histogram.bins[0].count, 1);
    assert_eq!(histogram.bins[49].count, 1);
}

#[test]
fn bins_csv_written_to_disk() {
    let periods = LoadedDataset::load(&fixture()).unwrap().periods().unwrap();
    let histogram = Histogram::build(&periods, 5).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bins.csv");
    histogram
        .write_csv(std::fs::File::create(&path).unwrap())
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 6);
    assert!(text.starts_with("lower,upper,count,percent\n"));
}

#[test]
fn missing_file_is_io_error() {
    let err = LoadedDataset::load(&fixture().with_file_name("absent.txt")).unwrap_err();
    assert!(matches!(err, tepcat_plot::PlotError::Io(_)));
}
