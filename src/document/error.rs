//! Document loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a ticket document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported document type: {path} (expected .html, .htm or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Malformed fragment list in {path}: {source}")]
    MalformedFragments {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid timeline selector '{selector}': {message}")]
    InvalidSelector {
        selector: &'static str,
        message: String,
    },
}
