//! Batch processing of ticket documents.
//!
//! Documents are independent, so they are processed on the rayon pool when
//! `parallel` is set. Results are always reported in input order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::document::{self, DocumentLoader, LoadOutcome};
use crate::extractor::{KbEntry, TicketPipeline};

/// Settings for discovering and processing ticket files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// File name prefix of ticket exports
    pub file_prefix: String,
    /// Extensions (without dot) considered ticket documents
    pub extensions: Vec<String>,
    /// Number of KB entries shown in the text summary
    pub sample_size: usize,
    /// Process documents on multiple threads
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            file_prefix: "INC".to_string(),
            extensions: vec!["html".to_string(), "htm".to_string(), "json".to_string()],
            sample_size: 5,
            parallel: true,
        }
    }
}

impl BatchConfig {
    /// Whether `path` looks like a ticket document.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        name.starts_with(&self.file_prefix)
            && self
                .extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }
}

/// Ticket documents directly inside `dir`, sorted by path.
pub fn discover(dir: &Path, config: &BatchConfig) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && config.matches(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// How a single document fared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Activity stream found and processed
    Parsed { activities: usize, entries: usize },
    /// Document loaded but contains no activity stream
    NoTimeline,
    /// Document could not be loaded
    Failed { error: String },
}

/// Per-document line of a batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub ticket_id: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: DocumentStatus,
}

/// Aggregated result of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub documents: Vec<DocumentReport>,
    /// KB entries in document order, then activity order
    pub entries: Vec<KbEntry>,
}

impl BatchReport {
    pub fn tickets_processed(&self) -> usize {
        self.documents.len()
    }

    pub fn failed_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| matches!(d.status, DocumentStatus::Failed { .. }))
            .count()
    }

    pub fn no_timeline_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| d.status == DocumentStatus::NoTimeline)
            .count()
    }
}

fn process_document(
    path: &Path,
    loader: &DocumentLoader,
    pipeline: &TicketPipeline,
) -> (DocumentReport, Vec<KbEntry>) {
    match loader.extract_file(path, pipeline) {
        Ok(LoadOutcome::Extracted(extraction)) => {
            info!(
                ticket = %extraction.ticket_id,
                activities = extraction.activities,
                entries = extraction.entries.len(),
                "Processed ticket"
            );
            let report = DocumentReport {
                ticket_id: extraction.ticket_id,
                path: path.to_path_buf(),
                status: DocumentStatus::Parsed {
                    activities: extraction.activities,
                    entries: extraction.entries.len(),
                },
            };
            (report, extraction.entries)
        }
        Ok(LoadOutcome::NoTimeline { ticket_id }) => {
            debug!(ticket = %ticket_id, path = %path.display(), "No activity stream found");
            let report = DocumentReport {
                ticket_id,
                path: path.to_path_buf(),
                status: DocumentStatus::NoTimeline,
            };
            (report, Vec::new())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load ticket");
            let report = DocumentReport {
                ticket_id: document::ticket_id_from_path(path),
                path: path.to_path_buf(),
                status: DocumentStatus::Failed {
                    error: e.to_string(),
                },
            };
            (report, Vec::new())
        }
    }
}

/// Process every document and concatenate the KB entries in input order.
///
/// A failing document is recorded in the report and does not stop the batch.
pub fn run(
    paths: &[PathBuf],
    loader: &DocumentLoader,
    pipeline: &TicketPipeline,
    parallel: bool,
) -> BatchReport {
    let results: Vec<(DocumentReport, Vec<KbEntry>)> = if parallel {
        paths
            .par_iter()
            .map(|path| process_document(path, loader, pipeline))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| process_document(path, loader, pipeline))
            .collect()
    };

    let mut report = BatchReport::default();
    for (document, entries) in results {
        report.documents.push(document);
        report.entries.extend(entries);
    }
    report
}
