//! Ticket document loading.
//!
//! Turns a file on disk into fragments for the extraction pipeline. The
//! format is picked from the file extension:
//!
//! - [`html`] - HTML ticket exports (`.html`, `.htm`)
//! - [`json`] - pre-extracted fragment lists (`.json`)

mod error;
pub mod html;
pub mod json;

use std::fs;
use std::path::Path;

pub use error::DocumentError;

use crate::extractor::{TicketExtraction, TicketPipeline};

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Html,
    Json,
}

impl DocumentFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(Self::Html),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// What loading a document produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The document had an activity stream (possibly with no KB entries)
    Extracted(TicketExtraction),
    /// The document loaded but has no activity stream
    NoTimeline { ticket_id: String },
}

impl LoadOutcome {
    pub fn ticket_id(&self) -> &str {
        match self {
            Self::Extracted(extraction) => &extraction.ticket_id,
            Self::NoTimeline { ticket_id } => ticket_id,
        }
    }
}

/// Ticket identifier for a document: the file name without extension.
pub fn ticket_id_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Loads ticket documents from disk.
///
/// Holds the compiled HTML selectors. One loader serves a whole batch.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    selectors: html::TimelineSelectors,
}

impl DocumentLoader {
    pub fn new() -> Result<Self, DocumentError> {
        Ok(Self {
            selectors: html::TimelineSelectors::new()?,
        })
    }

    /// Load one ticket document and run it through `pipeline`.
    pub fn extract_file(
        &self,
        path: &Path,
        pipeline: &TicketPipeline,
    ) -> Result<LoadOutcome, DocumentError> {
        let format = DocumentFormat::from_path(path).ok_or_else(|| DocumentError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        if !path.exists() {
            return Err(DocumentError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| DocumentError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let ticket_id = ticket_id_from_path(path);

        match format {
            DocumentFormat::Html => {
                Ok(match html::extract(&ticket_id, &content, &self.selectors, pipeline) {
                    Some(extraction) => LoadOutcome::Extracted(extraction),
                    None => LoadOutcome::NoTimeline { ticket_id },
                })
            }
            DocumentFormat::Json => {
                let list = json::parse(&content).map_err(|source| DocumentError::MalformedFragments {
                    path: path.to_path_buf(),
                    source,
                })?;
                let ticket_id = list.ticket_id.unwrap_or(ticket_id);
                Ok(LoadOutcome::Extracted(pipeline.run(&ticket_id, list.fragments)))
            }
        }
    }
}
