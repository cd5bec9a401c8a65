//! Rendering of batch results.

use serde::Serialize;

use crate::batch::{BatchReport, DocumentReport, DocumentStatus};
use crate::extractor::KbEntry;

/// Human-readable summary: per-ticket counts, totals and sample entries.
pub fn render_text(report: &BatchReport, sample_size: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Found {} ticket files\n\n",
        report.tickets_processed()
    ));

    for document in &report.documents {
        out.push_str(&document_line(document));
        out.push('\n');
    }

    out.push_str("\n=== BATCH SUMMARY ===\n");
    out.push_str(&format!(
        "Tickets processed : {}\n",
        report.tickets_processed()
    ));
    out.push_str(&format!("KB entries found  : {}\n", report.entries.len()));
    out.push_str(&format!("No activity stream: {}\n", report.no_timeline_count()));
    out.push_str(&format!("Failed to load    : {}\n", report.failed_count()));

    if sample_size > 0 && !report.entries.is_empty() {
        out.push_str("\n=== SAMPLE KB ENTRIES ===\n");
        for entry in report.entries.iter().take(sample_size) {
            out.push_str(&render_entry(entry));
        }
    }

    out
}

fn document_line(document: &DocumentReport) -> String {
    match &document.status {
        DocumentStatus::Parsed { entries, .. } => {
            format!("{}: {} KB entries", document.ticket_id, entries)
        }
        DocumentStatus::NoTimeline => format!("{}: no activity stream", document.ticket_id),
        DocumentStatus::Failed { error } => format!("{}: failed: {}", document.ticket_id, error),
    }
}

fn render_entry(entry: &KbEntry) -> String {
    format!(
        "\n--- KB ENTRY ---\n\
         Ticket     : {}\n\
         Author     : {}\n\
         Visibility : {}\n\
         Timestamp  : {}\n\
         Content:\n{}\n",
        entry.ticket_id(),
        entry.author(),
        entry.visibility(),
        entry.timestamp().unwrap_or("-"),
        entry.content()
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    tickets_processed: usize,
    documents: &'a [DocumentReport],
    entries: &'a [KbEntry],
}

/// Full report as pretty-printed JSON.
pub fn render_json(report: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        tickets_processed: report.tickets_processed(),
        documents: &report.documents,
        entries: &report.entries,
    })
}

/// One JSON object per KB entry, one per line.
pub fn render_jsonl(entries: &[KbEntry]) -> serde_json::Result<String> {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&serde_json::to_string(entry)?);
        out.push('\n');
    }
    Ok(out)
}
