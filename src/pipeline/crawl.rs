// src/pipeline/crawl.rs

//! Score crawling pipeline.
//!
//! Drives the page queue strictly serially: one fetch at a time with a
//! fixed pause between pages. The throttle is deliberate; this is someone
//! else's server.

use std::time::Duration;

use scraper::Html;

use crate::config::CrawlerConfig;
use crate::error::Result;
use crate::models::{CrawlResult, PageInfo};
use crate::services::ScoreExtractor;
use crate::utils::http::PageSource;

/// Append-only sink for human-readable progress lines.
///
/// Purely observational: nothing the sink does feeds back into the crawl.
/// Lines written before a failure remain visible as a diagnostic trail.
pub trait ProgressSink: Send + Sync {
    fn line(&self, text: &str);
}

/// Progress sink backed by the `log` crate.
pub struct LogSink;

impl ProgressSink for LogSink {
    fn line(&self, text: &str) {
        log::info!("{text}");
    }
}

/// Tuning knobs for a crawl run.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Maximum number of pages to visit
    pub page_limit: usize,

    /// Fixed pause between page fetches
    pub delay: Duration,
}

impl From<&CrawlerConfig> for CrawlOptions {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            page_limit: config.page_limit,
            delay: Duration::from_millis(config.page_delay_ms),
        }
    }
}

/// Crawl the planned page window and accumulate every extracted record.
///
/// Pages are visited in ascending order, never concurrently. Any fetch or
/// extraction failure aborts the whole crawl: no partial result is
/// returned and no later page is attempted, because a silently incomplete
/// export is worse than a visible halt. The sink receives a final error
/// line before the failure propagates.
pub async fn crawl_scores(
    source: &dyn PageSource,
    extractor: &ScoreExtractor,
    page_info: PageInfo,
    options: &CrawlOptions,
    progress: &dyn ProgressSink,
) -> Result<CrawlResult> {
    match crawl_inner(source, extractor, page_info, options, progress).await {
        Ok(result) => Ok(result),
        Err(error) => {
            progress.line(&format!("Export failed: {error}"));
            Err(error)
        }
    }
}

async fn crawl_inner(
    source: &dyn PageSource,
    extractor: &ScoreExtractor,
    page_info: PageInfo,
    options: &CrawlOptions,
    progress: &dyn ProgressSink,
) -> Result<CrawlResult> {
    let queue = page_info.queue(options.page_limit);
    // The queue always contains at least the current page.
    let first = queue.first().copied().unwrap_or(page_info.current_page);
    let last = queue.last().copied().unwrap_or(page_info.current_page);

    let mut result = CrawlResult::default();
    for (index, page) in queue.iter().copied().enumerate() {
        progress.line(&format!("Fetching scores from page {page}"));
        let body = source.fetch(page).await?;
        let document = Html::parse_document(&body);
        let page_scores = extractor.extract_page(&document)?;

        progress.line(&format!("    Fetched {} SP scores.", page_scores.sp.len()));
        progress.line(&format!("    Fetched {} DP scores.", page_scores.dp.len()));
        result.extend(page_scores);

        let is_last = index + 1 == queue.len();
        if !is_last && !options.delay.is_zero() {
            progress.line(&format!(
                "Waiting {}ms to avoid overloading the website...",
                options.delay.as_millis()
            ));
            tokio::time::sleep(options.delay).await;
        }
    }

    progress.line(&format!("Fetched all scores from pages {first} to {last}."));
    progress.line(&format!("Total SP: {}", result.sp.len()));
    progress.line(&format!("Total DP: {}", result.dp.len()));
    Ok(result)
}
