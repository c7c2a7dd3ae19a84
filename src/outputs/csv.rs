//! CSV sink for article records.
//!
//! Column order is fixed: `rank,title,summary,link,scraped_at`. Fields
//! containing commas, quotes, or line breaks are quoted RFC 4180 style,
//! with embedded quotes doubled.

use crate::models::ArticleRecord;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

const HEADER: [&str; 5] = ["rank", "title", "summary", "link", "scraped_at"];

/// Write the records to `path`, one row per record in order.
///
/// An empty record set is a valid no-op: a warning is logged and no file
/// is created, so a failed run never leaves an empty artifact behind.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be written.
pub async fn write_records(records: &[ArticleRecord], path: &Path) -> io::Result<()> {
    if records.is_empty() {
        warn!("No articles to save");
        return Ok(());
    }

    info!(count = records.len(), path = %path.display(), "Saving articles");

    let mut out = String::new();
    out.push_str(&HEADER.join(","));
    out.push('\n');
    for record in records {
        out.push_str(&record_row(record));
        out.push('\n');
    }

    fs::write(path, out).await?;
    info!(path = %path.display(), "Saved articles");
    Ok(())
}

/// Render one record as a CSV row, without the trailing newline.
fn record_row(record: &ArticleRecord) -> String {
    [
        record.rank.to_string(),
        escape_field(&record.title),
        escape_field(&record.summary),
        escape_field(&record.link),
        escape_field(&record.scraped_at),
    ]
    .join(",")
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
