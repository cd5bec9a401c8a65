//! Signature and header stripping for public activity content.
//!
//! Customer-facing comments usually arrive as mail replies. Everything from
//! the signature block onward is noise, and quoted mail headers are noise on
//! their own line. Internal notes are never passed through here.

use regex::{Regex, RegexSet, RegexSetBuilder};

use super::config::CleanerConfig;

/// Errors building a [`ContentCleaner`] from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CleanerError {
    #[error("Invalid header pattern: {0}")]
    InvalidHeaderPattern(#[from] regex::Error),

    #[error("Invalid line break pattern: {0}")]
    InvalidLineBreakPattern(regex::Error),
}

/// Line boundaries: `\r\n`, `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line/paragraph
/// separators.
const LINE_BREAKS: &str = r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]";

/// Line-based cleaner for public activity text.
///
/// **Algorithm**:
/// 1. Trim each line
/// 2. Stop at the first line containing a stop marker (case-insensitive)
/// 3. Drop lines matching a header pattern at line start (case-insensitive)
/// 4. Rejoin, cap consecutive newlines, trim the result
#[derive(Debug, Clone)]
pub struct ContentCleaner {
    line_breaks: Regex,
    stop_markers: Vec<String>,
    header_patterns: RegexSet,
    max_consecutive_newlines: usize,
}

impl ContentCleaner {
    /// Build a cleaner. Header patterns are anchored at line start.
    pub fn new(config: &CleanerConfig) -> Result<Self, CleanerError> {
        let stop_markers = config
            .stop_markers
            .iter()
            .filter(|marker| !marker.is_empty())
            .map(|marker| marker.to_lowercase())
            .collect();

        let header_patterns = RegexSetBuilder::new(
            config
                .header_patterns
                .iter()
                .map(|pattern| format!("^(?:{})", pattern)),
        )
        .case_insensitive(true)
        .build()?;

        let line_breaks = Regex::new(LINE_BREAKS).map_err(CleanerError::InvalidLineBreakPattern)?;

        Ok(Self {
            line_breaks,
            stop_markers,
            header_patterns,
            max_consecutive_newlines: config.max_consecutive_newlines.max(1),
        })
    }

    /// Whether `line` starts the signature/boilerplate trailer.
    pub fn is_stop_line(&self, line: &str) -> bool {
        if self.stop_markers.is_empty() {
            return false;
        }
        let lowered = line.to_lowercase();
        self.stop_markers
            .iter()
            .any(|marker| lowered.contains(marker.as_str()))
    }

    /// Whether `line` is a mail header to drop.
    pub fn is_header_line(&self, line: &str) -> bool {
        self.header_patterns.is_match(line)
    }

    /// Clean public activity text.
    pub fn clean(&self, text: &str) -> String {
        let mut kept = Vec::new();

        for line in self.lines(text) {
            let line = line.trim();
            if self.is_stop_line(line) {
                break;
            }
            if self.is_header_line(line) {
                continue;
            }
            kept.push(line);
        }

        self.limit_newlines(&kept.join("\n")).trim().to_string()
    }

    /// Split at every line boundary. A trailing boundary does not start an
    /// extra line.
    fn lines<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        let mut lines: Vec<&'t str> = self.line_breaks.split(text).collect();
        if lines.last().is_some_and(|last| last.is_empty()) {
            lines.pop();
        }
        lines.into_iter()
    }

    fn limit_newlines(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut newline_count = 0;

        for c in text.chars() {
            if c == '\n' {
                newline_count += 1;
                if newline_count <= self.max_consecutive_newlines {
                    result.push(c);
                }
            } else {
                newline_count = 0;
                result.push(c);
            }
        }
        result
    }
}
