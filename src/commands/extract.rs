//! Extract command handler

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use ticket_kb::batch;
use ticket_kb::document::DocumentLoader;
use ticket_kb::cli::{ExtractArgs, OutputFormat};
use ticket_kb::extractor::KbFilter;
use ticket_kb::report;
use ticket_kb::{BatchConfig, Config};

/// Expand directories into the ticket files they contain.
fn collect_paths(inputs: &[PathBuf], config: &BatchConfig) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = batch::discover(input, config)
                .with_context(|| format!("Failed to list {}", input.display()))?;
            if found.is_empty() {
                bail!(
                    "No ticket files found in {} (expected {}*.{{{}}})",
                    input.display(),
                    config.file_prefix,
                    config.extensions.join(",")
                );
            }
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

/// Run the extraction pipeline over the given inputs and render the result.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ExtractArgs, config: &Config) -> Result<()> {
    let mut pipeline = config.pipeline()?;
    if !args.kb_types.is_empty() {
        pipeline = pipeline.with_filter(KbFilter::new(args.kb_types.iter().cloned()));
    }

    let paths = collect_paths(&args.paths, &config.batch)?;
    let parallel = config.batch.parallel && !args.no_parallel;
    info!(documents = paths.len(), parallel, "Starting extraction");

    let loader = DocumentLoader::new()?;
    let batch_report = batch::run(&paths, &loader, &pipeline, parallel);

    let rendered = match args.format {
        OutputFormat::Text => report::render_text(
            &batch_report,
            args.sample.unwrap_or(config.batch.sample_size),
        ),
        OutputFormat::Json => report::render_json(&batch_report)?,
        OutputFormat::Jsonl => report::render_jsonl(&batch_report.entries)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
