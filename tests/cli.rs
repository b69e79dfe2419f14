#![cfg(unix)]

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway home directory with a `Downloads` folder
struct HomeEnv {
    _tmp: TempDir,
    home: PathBuf,
}

impl HomeEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let home = tmp.path().to_path_buf();
        fs::create_dir_all(home.join("Downloads"))?;
        Ok(Self { _tmp: tmp, home })
    }

    fn downloads(&self, file: &str) -> PathBuf {
        self.home.join("Downloads").join(file)
    }

    fn bin(&self, name: &str) -> Result<Command> {
        let mut cmd = Command::cargo_bin(name)?;
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        Ok(cmd)
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_both_stages_from_home_downloads() -> Result<()> {
    let env = HomeEnv::new()?;
    fs::write(
        env.downloads("brandedDownload.json"),
        r#"{"BrandedFoods": [
            {"fdcId": 1, "ingredients": "WATER, CANOLA OIL, SALT", "brandOwner": "KROGER"},
            {"fdcId": 2, "ingredients": "WATER, SALT", "brandOwner": "KROGER", "tags": ["a", 1.5]},
            {"fdcId": 3, "ingredients": "WATER, SALT", "brandOwner": "Acme Co"}
        ]}"#,
    )?;

    env.bin("sift-ingredients")?
        .assert()
        .success()
        .stdout(predicate::str::contains("Total items processed: 3"))
        .stdout(predicate::str::contains("Total items written to CSV: 2"));

    assert_eq!(
        read(&env.downloads("filtered_products.csv")),
        "fdcId,ingredients,brandOwner,tags\r\n\
         2,\"WATER, SALT\",KROGER,\"[\"\"a\"\",1.5]\"\r\n\
         3,\"WATER, SALT\",Acme Co,\r\n"
    );

    env.bin("sift-brands")?
        .assert()
        .success()
        .stdout(predicate::str::contains("Total items processed: 2"))
        .stdout(predicate::str::contains("Total items written to CSV: 1"));

    assert_eq!(
        read(&env.downloads("filtered_brands.csv")),
        "fdcId,ingredients,brandOwner,tags\r\n\
         2,\"WATER, SALT\",KROGER,\"[\"\"a\"\",1.5]\"\r\n"
    );

    Ok(())
}

#[test]
fn test_missing_source_fails() -> Result<()> {
    let env = HomeEnv::new()?;

    env.bin("sift-ingredients")?
        .assert()
        .failure()
        .stderr(predicate::str::contains("brandedDownload.json"));

    Ok(())
}

#[test]
fn test_malformed_json_fails() -> Result<()> {
    let env = HomeEnv::new()?;
    fs::write(env.downloads("brandedDownload.json"), r#"{"BrandedFoods": [{"ingredients": "#)?;

    env.bin("sift-ingredients")?.assert().failure();

    Ok(())
}

#[test]
fn test_brand_stage_needs_brand_column() -> Result<()> {
    let env = HomeEnv::new()?;
    fs::write(env.downloads("filtered_products.csv"), "fdcId,ingredients\r\n1,WATER\r\n")?;

    env.bin("sift-brands")?
        .assert()
        .failure()
        .stderr(predicate::str::contains("brandOwner"));

    Ok(())
}
