//! Activity extraction pipeline for ticket timelines.
//!
//! A ticket export is a flat list of cards. This module rebuilds the
//! activities those cards describe and keeps the ones worth putting in a
//! knowledge base:
//!
//! 1. [`fragment`] classifies each card structurally (author marker,
//!    type/timestamp marker, one of three content kinds, or nothing)
//! 2. [`segmenter`] folds the classified fragments into [`Activity`] records
//! 3. [`cleaner`] strips signature trailers and mail headers from public text
//! 4. [`filter`] keeps activities of a KB-worthy type with non-empty content
//!
//! Everything here is pure and synchronous. Callers own I/O and logging.
//!
//! # Module Structure
//!
//! - [`config`] - Extraction and cleaner configuration
//! - [`activity`] - Activity records and visibility
//! - [`pipeline`] - Per-ticket orchestration

pub mod activity;
pub mod cleaner;
pub mod config;
pub mod filter;
pub mod fragment;
pub mod pipeline;
pub mod segmenter;

// Re-export main types
pub use activity::{Activity, ActivityBuilder, KbEntry, Visibility};
pub use cleaner::{CleanerError, ContentCleaner};
pub use config::{CleanerConfig, ExtractionConfig};
pub use filter::KbFilter;
pub use fragment::{
    classify, normalize_activity_type, normalize_activity_type_with, ContentKind, Fragment,
    FragmentKind, FragmentSource, RawFragment,
};
pub use pipeline::{TicketExtraction, TicketPipeline};
pub use segmenter::Segmenter;
