use serde_json::{Map, Value};

/// One product object from the source array, keys in document order
pub type ProductRecord = Map<String, Value>;

/// A record ready for CSV output.
///
/// Every value is a scalar: nested lists and maps have already been
/// replaced by their JSON text.
pub type FlatRow = Map<String, Value>;

/// Default key holding the product array in the source document
pub const RECORDS_KEY: &str = "BrandedFoods";

/// Default number of processed records between progress events
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Tunables for the ingredient stage
#[derive(Debug, Clone)]
pub struct SiftConfig {
    /// Top-level key whose array holds the product records
    pub records_key: String,

    /// Emit a progress event every N processed records (0 disables)
    pub progress_interval: u64,
}

impl Default for SiftConfig {
    fn default() -> Self {
        SiftConfig {
            records_key: String::from(RECORDS_KEY),
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}

/// Counters produced by a stage run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiftReport {
    /// Records (or rows) read from the source
    pub processed: u64,

    /// Records written to the output CSV
    pub written: u64,

    /// Records dropped because they had no usable ingredient text
    pub skipped: u64,

    /// Records dropped by the denylist or the brand allowlist
    pub rejected: u64,
}

impl SiftReport {
    /// Print the run totals to stdout
    pub fn print_summary(&self) {
        println!("Total items processed: {}", self.processed);
        println!("Total items written to CSV: {}", self.written);
    }
}
