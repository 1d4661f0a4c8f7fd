// src/services/mod.rs

//! Service layer for the exporter.
//!
//! - Timestamp parsing (`datetime`)
//! - Score-grid extraction (`ScoreExtractor`)
//! - Score-grid markup contract (`ScoreGridSelectors`)

pub mod datetime;
mod scores;
mod selectors;

pub use scores::ScoreExtractor;
pub use selectors::ScoreGridSelectors;
