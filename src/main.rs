//! # BBC News Digest
//!
//! A run-to-completion batch job that scrapes the top stories from the
//! BBC News front page, summarizes each one, and saves the result as a
//! timestamped CSV file.
//!
//! ## Pipeline
//!
//! 1. **Locate**: find article cards on the homepage via an ordered
//!    selector fallback chain
//! 2. **Extract**: pull title, link, and summary out of each card, up to
//!    10 articles from a pool of 15 candidates
//! 3. **Fetch**: retrieve each article's opening paragraphs, pausing
//!    between requests
//! 4. **Summarize**: reuse the card summary, derive one from the body,
//!    or fall back to the title
//! 5. **Save**: write `rank,title,summary,link,scraped_at` rows to CSV
//!    and print a preview of the first five records
//!
//! Failures shrink the output instead of aborting the run: bad cards are
//! skipped, failed article fetches only lose that article's body text,
//! and only a failed homepage fetch produces zero records.

use chrono::Local;
use std::error::Error;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod config;
mod extract;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod summarize;
mod utils;

use config::SiteConfig;
use fetch::HttpFetcher;
use pipeline::Pipeline;
use utils::truncate_display;

/// How many records the console preview shows.
const PREVIEW_COUNT: usize = 5;

#[tokio::main]
async fn main() {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Scrape run failed");
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();
    info!("bbc_news_digest starting up");

    let config = SiteConfig::default();
    let fetcher = HttpFetcher::new(&config)?;
    let records = Pipeline::new(&fetcher, &config).run().await;

    if records.is_empty() {
        println!("❌ No articles were successfully scraped.");
        println!("This might be due to changes in the BBC website structure.");
        return Ok(());
    }

    let filename = format!(
        "bbc_news_top10_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    outputs::csv::write_records(&records, Path::new(&filename)).await?;

    println!("\n✅ Successfully scraped {} articles!", records.len());
    println!("📄 Results saved to: {filename}");
    println!("\n📋 Summary:");
    println!("{}", "-".repeat(60));
    for record in records.iter().take(PREVIEW_COUNT) {
        println!("{}. {}", record.rank, record.title);
        println!("   Summary: {}", truncate_display(&record.summary, 100));
        println!("   Link: {}", record.link);
        println!();
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, count = records.len(), "Execution complete");
    Ok(())
}
