//! Stage A: drop products whose ingredients mention a denylisted oil or additive.
//!
//! The source document is streamed one record at a time. Records that pass
//! are flattened and appended to a CSV whose columns are fixed by the first
//! record written.

pub mod denylist;
pub mod flatten;
pub mod stream;

pub use denylist::{IngredientFilter, DENYLIST};
pub use flatten::{flatten_record, render_cell};
pub use stream::for_each_record;

use crate::types::{ProductRecord, SiftConfig, SiftReport};
use crate::writer::CsvSink;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// What to do with one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No usable ingredient text
    Skip,
    /// Ingredients mention a denylisted phrase
    Reject,
    Keep,
}

/// Decide a record's fate from its `ingredients` field
pub fn classify(record: &ProductRecord, filter: &IngredientFilter) -> Verdict {
    let ingredients = match record.get("ingredients") {
        Some(Value::String(text)) if !text.trim().is_empty() => text,
        _ => return Verdict::Skip,
    };

    match filter.find(ingredients) {
        Some(phrase) => {
            debug!(phrase, "rejecting record");
            Verdict::Reject
        }
        None => Verdict::Keep,
    }
}

/// Whether a progress event is due after `processed` records, whatever their verdict
pub fn progress_due(processed: u64, interval: u64) -> bool {
    interval > 0 && processed > 0 && processed % interval == 0
}

/// Filter the records under `config.records_key` from `reader` into `sink`
pub fn sift_ingredients<R: Read, W: Write>(
    reader: R,
    sink: &mut CsvSink<W>,
    filter: &IngredientFilter,
    config: &SiftConfig,
) -> Result<SiftReport> {
    let mut report = SiftReport::default();

    for_each_record(reader, &config.records_key, |record| {
        report.processed += 1;

        match classify(&record, filter) {
            Verdict::Skip => report.skipped += 1,
            Verdict::Reject => report.rejected += 1,
            Verdict::Keep => {
                let row = flatten_record(&record)?;
                sink.write_flat_row(&row)
                    .context("Failed to write CSV row")?;
                report.written += 1;
            }
        }

        if progress_due(report.processed, config.progress_interval) {
            info!(processed = report.processed, "Processed {} items...", report.processed);
        }
        Ok(())
    })?;

    sink.flush().context("Failed to flush CSV output")?;

    info!(
        processed = report.processed,
        written = report.written,
        skipped = report.skipped,
        rejected = report.rejected,
        "ingredient filter finished"
    );
    Ok(report)
}

/// File-to-file wrapper around [`sift_ingredients`]
pub fn sift_ingredients_file(
    input: &Path,
    output: &Path,
    filter: &IngredientFilter,
    config: &SiftConfig,
) -> Result<SiftReport> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let mut sink = CsvSink::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    info!(input = %input.display(), output = %output.display(), "filtering ingredients");

    sift_ingredients(BufReader::new(file), &mut sink, filter, config)
        .with_context(|| format!("Failed to filter {}", input.display()))
}
