//! Per-ticket orchestration: classify, segment, filter.

use serde::Serialize;

use super::activity::KbEntry;
use super::cleaner::{CleanerError, ContentCleaner};
use super::config::{CleanerConfig, ExtractionConfig};
use super::filter::KbFilter;
use super::fragment::{Fragment, FragmentSource};
use super::segmenter::Segmenter;

/// Result of running one ticket through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketExtraction {
    pub ticket_id: String,
    /// Activities found before filtering
    pub activities: usize,
    pub entries: Vec<KbEntry>,
}

/// Configured extraction pipeline, shareable across worker threads.
#[derive(Debug, Clone)]
pub struct TicketPipeline {
    cleaner: ContentCleaner,
    filter: KbFilter,
    type_separators: Vec<String>,
}

impl TicketPipeline {
    pub fn new(extraction: &ExtractionConfig, cleaner: &CleanerConfig) -> Result<Self, CleanerError> {
        Ok(Self {
            cleaner: ContentCleaner::new(cleaner)?,
            filter: KbFilter::from_config(extraction),
            type_separators: extraction.type_separators.clone(),
        })
    }

    /// Replace the KB filter, e.g. with types given on the command line.
    pub fn with_filter(mut self, filter: KbFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn cleaner(&self) -> &ContentCleaner {
        &self.cleaner
    }

    pub fn filter(&self) -> &KbFilter {
        &self.filter
    }

    pub fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(&self.cleaner, &self.type_separators)
    }

    /// Run one ticket's cards through classification, segmentation and the
    /// KB filter.
    pub fn run<I>(&self, ticket_id: &str, sources: I) -> TicketExtraction
    where
        I: IntoIterator,
        I::Item: FragmentSource,
    {
        let fragments = sources
            .into_iter()
            .map(|source| Fragment::from_source(&source));
        let activities = self.segmenter().segment(ticket_id, fragments);
        let total = activities.len();

        TicketExtraction {
            ticket_id: ticket_id.to_string(),
            activities: total,
            entries: self.filter.filter(activities),
        }
    }
}
