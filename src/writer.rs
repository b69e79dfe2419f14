use crate::error::SiftError;
use crate::ingredients::flatten::render_cell;
use crate::types::FlatRow;
use csv::{StringRecord, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV output whose header is fixed by the first row written.
///
/// Nothing is written until the first row arrives, so a run that keeps no
/// rows leaves an empty file behind.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    header: Option<Vec<String>>,
    rows: u64,
}

impl CsvSink<File> {
    /// Create (or truncate) the output file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, SiftError> {
        let file = File::create(path)?;
        Ok(CsvSink::new(file))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Self {
        let writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(inner);

        CsvSink {
            writer,
            header: None,
            rows: 0,
        }
    }

    /// Column names, once the first row has been written
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Write a flattened record against the header.
    ///
    /// The first row's keys become the header. Later rows fill missing
    /// columns with blanks and lose any keys the header doesn't name.
    pub fn write_flat_row(&mut self, row: &FlatRow) -> Result<(), SiftError> {
        if self.header.is_none() {
            let header: Vec<String> = row.keys().cloned().collect();
            self.writer.write_record(&header)?;
            self.header = Some(header);
        }
        let header = self.header.as_deref().unwrap_or_default();

        let mut cells = Vec::with_capacity(header.len());
        for column in header {
            let cell = match row.get(column) {
                Some(value) => render_cell(column, value)?,
                None => String::new(),
            };
            cells.push(cell);
        }

        self.writer.write_record(&cells)?;
        self.rows += 1;
        Ok(())
    }

    /// Copy `row` verbatim, writing `header` first if nothing has been written yet
    pub fn write_passthrough(
        &mut self,
        header: &StringRecord,
        row: &StringRecord,
    ) -> Result<(), SiftError> {
        if self.header.is_none() {
            self.writer.write_record(header)?;
            self.header = Some(header.iter().map(str::to_string).collect());
        }

        self.writer.write_record(row)?;
        self.rows += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), SiftError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W, SiftError> {
        self.writer
            .into_inner()
            .map_err(|e| SiftError::Io(e.into_error()))
    }
}
