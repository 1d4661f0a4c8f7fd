// src/pipeline/mod.rs

//! Pipeline entry points for export operations.
//!
//! - `crawl_scores`: fetch and extract a bounded window of listing pages

pub mod crawl;

pub use crawl::{CrawlOptions, LogSink, ProgressSink, crawl_scores};
