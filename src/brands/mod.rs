//! Stage B: keep rows of the ingredient-filtered CSV whose brand owner is allowlisted.

pub mod allowlist;

pub use allowlist::{BrandAllowlist, BRAND_OWNERS};

use crate::error::SiftError;
use crate::types::SiftReport;
use crate::writer::CsvSink;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::info;

/// Column holding the brand owner
pub const BRAND_OWNER_COLUMN: &str = "brandOwner";

/// Copy the rows of `reader` whose brand owner is in `allowlist` into `sink`.
///
/// Rows are copied untouched and the output header is the input header.
pub fn sift_brands<R: Read, W: Write>(
    reader: R,
    sink: &mut CsvSink<W>,
    allowlist: &BrandAllowlist,
) -> Result<SiftReport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let header = reader
        .headers()
        .map_err(SiftError::Csv)
        .context("Failed to read CSV header")?
        .clone();

    let mut report = SiftReport::default();

    // An upstream run that kept nothing leaves an empty file
    if header.is_empty() {
        info!("input CSV is empty, nothing to filter");
        return Ok(report);
    }

    let brand_idx = header
        .iter()
        .position(|name| name == BRAND_OWNER_COLUMN)
        .ok_or_else(|| SiftError::MissingColumn(BRAND_OWNER_COLUMN.to_string()))?;

    for result in reader.records() {
        let row = result
            .map_err(SiftError::Csv)
            .context("Failed to read CSV row")?;
        report.processed += 1;

        let brand_owner = row.get(brand_idx).unwrap_or_default();
        if allowlist.contains(brand_owner) {
            sink.write_passthrough(&header, &row)
                .context("Failed to write CSV row")?;
            report.written += 1;
        } else {
            report.rejected += 1;
        }
    }

    sink.flush().context("Failed to flush CSV output")?;

    info!(
        processed = report.processed,
        written = report.written,
        "brand filter finished"
    );
    Ok(report)
}

/// File-to-file wrapper around [`sift_brands`]
pub fn sift_brands_file(
    input: &Path,
    output: &Path,
    allowlist: &BrandAllowlist,
) -> Result<SiftReport> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let mut sink = CsvSink::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    info!(input = %input.display(), output = %output.display(), "filtering brands");

    sift_brands(BufReader::new(file), &mut sink, allowlist)
        .with_context(|| format!("Failed to filter {}", input.display()))
}
