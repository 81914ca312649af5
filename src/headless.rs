//! Headless listing: one page, filtered, printed to stdout
//!
//! Drives the same `Browser` state container as the TUI, awaiting the single
//! fetch inline instead of through the event loop.

use crate::browser::{Browser, Command, Effect, LocationSource};
use crate::listing::ListingSource;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// Load `url`, apply `filter` and print the result
pub async fn run_list(
    source: Arc<dyn ListingSource>,
    url: &str,
    filter: Option<&str>,
    json: bool,
) -> Result<()> {
    let browser = load_filtered(source.as_ref(), url, filter).await?;

    let output = if json {
        let records: Vec<_> = browser.filtered_records().collect();
        serde_json::to_string_pretty(&records).context("Failed to serialize records")?
    } else {
        format_table(&browser)
    };

    println!("{}", output);
    Ok(())
}

/// Run Start + the resulting fetch, then apply the filter
pub async fn load_filtered(
    source: &dyn ListingSource,
    url: &str,
    filter: Option<&str>,
) -> Result<Browser> {
    let mut browser = Browser::new(url, LocationSource::default());

    if let Some(Effect::Fetch { generation, url }) = browser.apply(Command::Start) {
        let completion = match source.fetch_page(&url).await {
            Ok(page) => Command::PageLoaded { generation, page },
            Err(error) => Command::FetchFailed { generation, error },
        };
        browser.apply(completion);
    }

    if let Some(err) = browser.status().error() {
        return Err(err.clone()).with_context(|| format!("Could not load {}", url));
    }

    if let Some(query) = filter {
        browser.apply(Command::SetQuery(query.to_string()));
    }

    Ok(browser)
}

/// Aligned table of the filtered view with a pagination footer
pub fn format_table(browser: &Browser) -> String {
    let records: Vec<_> = browser.filtered_records().collect();
    let name_width = records
        .iter()
        .map(|r| r.name.width())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {}  {:<8}  SPECIES",
        "ID",
        pad("NAME", name_width),
        "STATUS"
    );
    for record in &records {
        let _ = writeln!(
            out,
            "{:>4}  {}  {:<8}  {}",
            record.id,
            pad(&record.name, name_width),
            record.status,
            record.species
        );
    }

    let page = browser.page();
    let _ = write!(
        out,
        "\n{} · {} of {} shown",
        page.label(),
        records.len(),
        page.records.len()
    );
    if let Some(next) = &page.next_link {
        let _ = write!(out, "\nnext: {}", next);
    }
    if let Some(prev) = &page.prev_link {
        let _ = write!(out, "\nprev: {}", prev);
    }

    out
}

/// Left-align by display width (names can contain wide characters)
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
