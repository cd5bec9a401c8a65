//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Activity type of internal work notes. The only type with internal visibility.
pub const INTERNAL_WORK_NOTES: &str = "Internal Work notes";

/// Activity type of customer-visible comments.
pub const ADDITIONAL_COMMENTS: &str = "Additional comments";

/// Activity types kept by the KB filter unless configured otherwise.
pub const DEFAULT_KB_TYPES: &[&str] = &[INTERNAL_WORK_NOTES, ADDITIONAL_COMMENTS];

/// Tokens that separate an activity type label from its relative-time suffix.
///
/// The second entry is the bullet as it appears in exports that were saved
/// as UTF-8 but read back as Windows-1252.
pub const DEFAULT_TYPE_SEPARATORS: &[&str] = &["•", "â€¢"];

/// Lines containing any of these (case-insensitive) end the useful content.
pub const DEFAULT_STOP_MARKERS: &[&str] = &[
    "--",
    "All electronic mail messages",
    "Public Records Law",
    "Schedule a",
    "Professor and",
    "College of",
    "Department of",
    "North Carolina State University",
    "Campus Box",
];

/// Mail-header lines dropped from public content. Matched at line start.
pub const DEFAULT_HEADER_PATTERNS: &[&str] = &[r"^reply from:", r"^received from:"];

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Settings for segmentation and KB filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Activity types eligible for the knowledge base
    pub kb_types: Vec<String>,
    /// Separators stripped (with everything after them) from type labels
    pub type_separators: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            kb_types: to_strings(DEFAULT_KB_TYPES),
            type_separators: to_strings(DEFAULT_TYPE_SEPARATORS),
        }
    }
}

/// Settings for the public content cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Substrings that mark the start of a signature or legal trailer
    pub stop_markers: Vec<String>,
    /// Regular expressions for header lines to drop
    pub header_patterns: Vec<String>,
    /// Maximum consecutive newlines kept in cleaned text (minimum 1)
    pub max_consecutive_newlines: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            stop_markers: to_strings(DEFAULT_STOP_MARKERS),
            header_patterns: to_strings(DEFAULT_HEADER_PATTERNS),
            max_consecutive_newlines: 2,
        }
    }
}
