//! End-to-end runs of the `usage-view` front-end against files on disk.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;
use usage_viewer::ViewerError;
use usage_viewer::cli::{Cli, run};

const HEADER: &str = "\"year\",\"month\",\"email\",\"model_id\",\"pages\",\"documents\"";

fn write_csv(dir: &TempDir, rows: &[String]) -> String {
    let path = dir.path().join("database.csv");
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    fs::write(&path, text).unwrap();
    path.to_string_lossy().into_owned()
}

fn sixty_rows() -> Vec<String> {
    (0..60)
        .map(|i| {
            let month = ["January", "February", "March"][i % 3];
            format!("\"2024\",\"{month}\",\"user{i}@Example.com\",\"model-{i}\",\"{}\",\"{i}\"", i * 1000)
        })
        .collect()
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("usage-view").chain(args.iter().copied())).unwrap()
}

fn out_path(dir: &TempDir) -> String {
    dir.path().join("out").join("page.txt").to_string_lossy().into_owned()
}

#[test]
fn test_scenario_from_sample() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        &dir,
        &[
            "2024,January,a@x.com,m1,1234,5".to_string(),
            "2024,February,b@y.com,m2,10,1".to_string(),
        ],
    );
    let out = out_path(&dir);

    let summary = run(&cli(&[&input, "--month", "January", "-o", &out])).unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.matched, 1);
    assert_eq!((summary.page_number, summary.total_pages), (1, 1));

    let table = fs::read_to_string(&out).unwrap();
    assert!(table.contains("a@x.com"));
    assert!(table.contains("1.234"));
    assert!(!table.contains("b@y.com"));
    assert!(table.ends_with("Page 1 of 1\n"));
}

#[test]
fn test_default_page_size_and_page_clamp() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, &sixty_rows());
    let out = out_path(&dir);

    let summary = run(&cli(&[&input, "--page", "2", "-o", &out])).unwrap();
    assert_eq!((summary.page_number, summary.total_pages), (2, 3));
    let table = fs::read_to_string(&out).unwrap();
    assert!(table.contains("user25@Example.com"));
    assert!(!table.contains("user24@Example.com"));

    let summary = run(&cli(&[&input, "--page", "40", "-o", &out])).unwrap();
    assert_eq!(summary.page_number, 3);
    let table = fs::read_to_string(&out).unwrap();
    assert!(table.contains("user59@Example.com"));
    assert!(table.ends_with("Page 3 of 3\n"));
}

#[test]
fn test_filters_combine() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, &sixty_rows());
    let out = out_path(&dir);

    let summary = run(&cli(&[
        &input, "--year", "2024", "--month", "March", "--email", "USER5", "-o", &out,
    ]))
    .unwrap();
    // March rows are i % 3 == 2; of those, user5, user50, user53, user56, user59.
    assert_eq!(summary.matched, 5);

    let summary = run(&cli(&[&input, "--year", "2025", "-o", &out])).unwrap();
    assert_eq!(summary.matched, 0);
    assert_eq!((summary.page_number, summary.total_pages), (1, 1));
    let table = fs::read_to_string(&out).unwrap();
    assert!(table.contains("(no matching records)"));
}

#[test]
fn test_malformed_rows_are_skipped_and_counted() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        &dir,
        &[
            "2024,May,a@x.com,m1,1,1".to_string(),
            "2024,May,a@x.com,m1,1".to_string(),
            String::new(),
            "2024,May,a@x.com,m1,oops,1".to_string(),
        ],
    );
    let out = out_path(&dir);

    let summary = run(&cli(&[&input, "-o", &out])).unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, &sixty_rows());
    let out = out_path(&dir);

    run(&cli(&[&input, "--page-size", "7", "--page", "9", "--format", "json", "-o", &out])).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["page_number"], 9);
    assert_eq!(json["total_pages"], 9);
    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["email"], "user56@Example.com");
    assert_eq!(records[0]["pages"], 56000);
    assert_eq!(records[0]["year"], 2024);
}

#[test]
fn test_missing_source_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");
    let err = run(&cli(&[missing.to_str().unwrap()])).unwrap_err();
    match err {
        ViewerError::SourceUnavailable { path, .. } => assert_eq!(path, Path::new(&missing)),
        other => panic!("expected SourceUnavailable, got {other}"),
    }
}
