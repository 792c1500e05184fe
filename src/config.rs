use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "COMPANIES";

/// Where to read pages from and where to put results.
///
/// Every field has a default; `COMPANIES_SITE_DIR`, `COMPANIES_ENTRY_PAGE`
/// and `COMPANIES_OUTPUT_DIR` override them.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub site_dir: PathBuf,
    pub entry_page: String,
    pub output_dir: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_source(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("site_dir", "site")?
            .set_default("entry_page", "page1.html")?
            .set_default("output_dir", "output")?
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .context("Failed to load settings")
    }

    pub fn entry_path(&self) -> PathBuf {
        self.site_dir.join(&self.entry_page)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join("companies.csv")
    }

    pub fn db_path(&self) -> PathBuf {
        self.output_dir.join("companies.db")
    }
}
