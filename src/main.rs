mod config;
mod crawler;
mod db;
mod error;
mod export;
mod normalize;
mod parser;
mod pipeline;
mod summary;

use std::time::Instant;

use clap::Parser;
use tracing::info;

use crate::config::Settings;

/// Crawl the local company directory, clean the rows, and save them as CSV and SQLite.
#[derive(Parser)]
#[command(name = "company_scraper", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let Cli {} = Cli::parse();

    let settings = Settings::load()?;
    info!(settings_loaded = ?settings, msg = "Starting company scraper");

    let output = pipeline::run(&settings)?;

    println!("Saved CSV    → {}", output.csv_path.display());
    println!("Saved SQLite → {}", output.db_path.display());
    println!();
    print!("{}", output.summary());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
