//! Fixed file locations for the two stages.
//!
//! Everything lives in `~/Downloads`: the source dump, the ingredient-filtered
//! CSV, and the brand-filtered CSV.

use crate::error::SiftError;
use std::path::{Path, PathBuf};

pub const DOWNLOADS_DIR: &str = "Downloads";
pub const SOURCE_JSON_FILE: &str = "brandedDownload.json";
pub const PRODUCTS_CSV_FILE: &str = "filtered_products.csv";
pub const BRANDS_CSV_FILE: &str = "filtered_brands.csv";

/// Input and output files shared by both stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Stage A input: the branded-foods JSON dump
    pub source_json: PathBuf,

    /// Stage A output, Stage B input
    pub products_csv: PathBuf,

    /// Stage B output
    pub brands_csv: PathBuf,
}

impl DataPaths {
    /// All three files under `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        DataPaths {
            source_json: dir.join(SOURCE_JSON_FILE),
            products_csv: dir.join(PRODUCTS_CSV_FILE),
            brands_csv: dir.join(BRANDS_CSV_FILE),
        }
    }

    /// All three files under the current user's `~/Downloads`
    pub fn from_home() -> Result<Self, SiftError> {
        let home = dirs::home_dir().ok_or(SiftError::NoHomeDir)?;
        Ok(Self::in_dir(home.join(DOWNLOADS_DIR)))
    }
}
