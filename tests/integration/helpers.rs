//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use ticket_kb::document::DocumentLoader;
use ticket_kb::{Config, TicketPipeline};

/// Ticket with five activities, three of them KB-worthy.
pub const FULL_TICKET: &str = "INC0001001.html";

/// HTML export without an activity stream.
pub const NO_STREAM_TICKET: &str = "INC0001002.html";

/// JSON fragment list with one KB-worthy internal note.
pub const JSON_TICKET: &str = "INC0001003.json";

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Copy a fixture into a fresh temp dir. Keep the `TempDir` alive while
/// using the path.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixture_path(name), &path).expect("Failed to copy fixture");
    (temp_dir, path)
}

pub fn default_pipeline() -> TicketPipeline {
    Config::default()
        .pipeline()
        .expect("Default config builds a pipeline")
}

pub fn loader() -> DocumentLoader {
    DocumentLoader::new().expect("Timeline selectors compile")
}
