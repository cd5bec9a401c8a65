//! ticket-kb - knowledge-base extraction from support-ticket activity streams.
//!
//! The library is split into a pure extraction core and the glue around it:
//!
//! - [`extractor`] - fragment classification, activity segmentation, content
//!   cleaning and KB filtering (no I/O, no logging)
//! - [`document`] - adapters that turn HTML exports or JSON fragment lists
//!   into fragments for the core
//! - [`batch`] - discovery and processing of many ticket files
//! - [`report`] - text and JSON rendering of batch results
//! - [`config`] - TOML configuration file handling
//! - [`cli`] - command-line definition shared by the binary and xtask

pub mod batch;
pub mod cli;
pub mod config;
pub mod document;
pub mod extractor;
pub mod report;

pub use batch::{BatchConfig, BatchReport, DocumentReport, DocumentStatus};
pub use config::Config;
pub use extractor::{Activity, KbEntry, TicketPipeline, Visibility};
