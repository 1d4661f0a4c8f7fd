// src/models/mod.rs

//! Domain models for the exporter.

mod batch;
mod page;
mod score;

// Re-export all public types
pub use batch::{BatchManual, BatchMeta, GAME, SERVICE};
pub use page::PageInfo;
pub use score::{CrawlResult, Difficulty, Judgements, MatchType, Playstyle, ScoreRecord};
