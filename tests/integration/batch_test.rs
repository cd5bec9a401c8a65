//! Integration tests for batch discovery and processing

use super::helpers::{default_pipeline, fixtures_dir, loader};
use ticket_kb::batch::{self, BatchConfig, DocumentStatus};
use ticket_kb::report;

#[test]
fn discovers_all_fixture_tickets() {
    let paths = batch::discover(&fixtures_dir(), &BatchConfig::default()).unwrap();

    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["INC0001001.html", "INC0001002.html", "INC0001003.json"]
    );
}

#[test]
fn html_only_extension_list() {
    let config = BatchConfig {
        extensions: vec!["html".to_string()],
        ..BatchConfig::default()
    };
    let paths = batch::discover(&fixtures_dir(), &config).unwrap();
    assert_eq!(paths.len(), 2);
}

#[test]
fn batch_concatenates_entries_in_document_order() {
    let paths = batch::discover(&fixtures_dir(), &BatchConfig::default()).unwrap();

    let report = batch::run(&paths, &loader(), &default_pipeline(), true);

    assert_eq!(report.tickets_processed(), 3);
    assert_eq!(report.no_timeline_count(), 1);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(
        report.documents[0].status,
        DocumentStatus::Parsed {
            activities: 5,
            entries: 3
        }
    );

    let tickets: Vec<_> = report.entries.iter().map(|e| e.ticket_id()).collect();
    assert_eq!(tickets, ["INC0001001", "INC0001001", "INC0001001", "INC0001003"]);
}

#[test]
fn sequential_and_parallel_runs_agree() {
    let paths = batch::discover(&fixtures_dir(), &BatchConfig::default()).unwrap();
    let loader = loader();
    let pipeline = default_pipeline();

    assert_eq!(
        batch::run(&paths, &loader, &pipeline, false),
        batch::run(&paths, &loader, &pipeline, true)
    );
}

#[test]
fn text_report_matches_batch() {
    let paths = batch::discover(&fixtures_dir(), &BatchConfig::default()).unwrap();
    let report = batch::run(&paths, &loader(), &default_pipeline(), false);

    let text = report::render_text(&report, 2);

    assert!(text.contains("INC0001001: 3 KB entries\n"));
    assert!(text.contains("INC0001002: no activity stream\n"));
    assert!(text.contains("INC0001003: 1 KB entries\n"));
    assert!(text.contains("KB entries found  : 4\n"));
    assert_eq!(text.matches("--- KB ENTRY ---").count(), 2);
}
