//! sift-ingredients: drop products with disallowed oils or additives
//!
//! Reads `~/Downloads/brandedDownload.json`, streams the `BrandedFoods`
//! array, and writes products whose ingredients pass the denylist to
//! `~/Downloads/filtered_products.csv`.
//!
//! Usage:
//!   sift-ingredients
//!
//!   # Show each rejected record's matched phrase
//!   RUST_LOG=debug sift-ingredients

// Use MiMalloc allocator for better performance
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use sifter::{sift_ingredients_file, DataPaths, IngredientFilter, SiftConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sift-ingredients", version)]
#[command(about = "Filter branded foods by ingredient denylist into CSV", long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = DataPaths::from_home()?;
    let report = sift_ingredients_file(
        &paths.source_json,
        &paths.products_csv,
        &IngredientFilter::standard(),
        &SiftConfig::default(),
    )?;

    report.print_summary();
    Ok(())
}
