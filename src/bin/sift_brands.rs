//! sift-brands: keep products from known store brands
//!
//! Reads `~/Downloads/filtered_products.csv` (the output of
//! `sift-ingredients`) and writes rows whose `brandOwner` is on the brand
//! allowlist to `~/Downloads/filtered_brands.csv`.
//!
//! Usage:
//!   sift-brands

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use sifter::{sift_brands_file, BrandAllowlist, DataPaths};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sift-brands", version)]
#[command(about = "Filter ingredient-filtered products by brand owner", long_about = None)]
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
    let report = sift_brands_file(&paths.products_csv, &paths.brands_csv, &BrandAllowlist::standard())?;

    report.print_summary();
    Ok(())
}
