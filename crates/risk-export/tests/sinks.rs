//! All four sinks against one scored dataset, written into a temp directory.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use risk_core::composer::compose_report;
use risk_core::entities::CoverPage;
use risk_core::generator::generate_dataset;
use risk_core::scoring::score_dataset;
use risk_export::{ArtifactPaths, ExportError, charts, document, spreadsheet};

fn paths_in(dir: &std::path::Path) -> ArtifactPaths {
    ArtifactPaths::from_fn(|kind| dir.join(format!("{kind}.out")))
}

#[test]
fn every_sink_writes_its_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let paths = paths_in(dir.path());

    let dataset = generate_dataset(20, Some(31));
    let scored = score_dataset(&dataset);
    let report = compose_report(
        &scored,
        CoverPage {
            title: "Risk Review".into(),
            author: "Ops".into(),
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        },
    );

    charts::write_risk_matrix(&dataset, &paths.risk_matrix_chart).unwrap();
    charts::write_score_distribution(&scored.histogram, &paths.score_distribution_chart).unwrap();
    spreadsheet::write_spreadsheet(&dataset, &paths.spreadsheet).unwrap();
    document::write_document(&report, &paths.document).unwrap();

    for kind in ArtifactPaths::ORDER {
        let meta = std::fs::metadata(paths.get(kind)).unwrap();
        assert!(meta.len() > 0, "{kind} is empty");
    }

    let csv = std::fs::read_to_string(&paths.spreadsheet).unwrap();
    assert_eq!(csv.lines().count(), 21);

    let html = std::fs::read_to_string(&paths.document).unwrap();
    for record in &dataset {
        assert!(html.contains(&format!("<td>{}</td>", record.id)));
    }
}

#[test]
fn spreadsheet_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::write(&path, "stale\nstale\nstale\nstale\nstale\n").unwrap();

    spreadsheet::write_spreadsheet(&generate_dataset(1, Some(1)), &path).unwrap();
    let csv = std::fs::read_to_string(&path).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(!csv.contains("stale"));
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("data.csv");
    let err = spreadsheet::write_spreadsheet(&generate_dataset(1, Some(1)), &path).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(std::fs::metadata(&path).is_err());
}
