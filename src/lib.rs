//! # Sifter - Branded Food Filtering
//!
//! Two batch stages over the branded-foods dataset:
//!
//! - **ingredients**: stream the product array out of a large JSON dump, drop
//!   products whose ingredient text mentions a disallowed oil or additive, and
//!   write the rest as CSV with nested values flattened to JSON text.
//! - **brands**: keep the rows of that CSV whose brand owner is on a fixed
//!   allowlist.
//!
//! The stages share nothing but the intermediate CSV file.
//!
//! ## Quick Start
//!
//! ```rust
//! use sifter::{sift_brands, sift_ingredients, BrandAllowlist, CsvSink, IngredientFilter, SiftConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let dump = br#"{"BrandedFoods": [
//!     {"ingredients": "WATER, CANOLA OIL, SALT", "brandOwner": "KROGER"},
//!     {"ingredients": "WATER, SALT", "brandOwner": "KROGER"},
//!     {"ingredients": "WATER, SALT", "brandOwner": "Acme Co"}
//! ]}"#;
//!
//! let mut products = CsvSink::new(Vec::new());
//! let report = sift_ingredients(&dump[..], &mut products, &IngredientFilter::standard(), &SiftConfig::default())?;
//! assert_eq!(report.written, 2);
//!
//! let products = products.into_inner()?;
//! let mut brands = CsvSink::new(Vec::new());
//! let report = sift_brands(products.as_slice(), &mut brands, &BrandAllowlist::standard())?;
//! assert_eq!(report.written, 1);
//! # Ok(())
//! # }
//! ```

pub mod brands;
pub mod error;
pub mod ingredients;
pub mod paths;
pub mod types;
pub mod writer;

// Re-export commonly used types for convenience
pub use brands::{sift_brands, sift_brands_file, BrandAllowlist};
pub use error::SiftError;
pub use ingredients::{sift_ingredients, sift_ingredients_file, IngredientFilter};
pub use paths::DataPaths;
pub use types::{FlatRow, ProductRecord, SiftConfig, SiftReport};
pub use writer::CsvSink;
