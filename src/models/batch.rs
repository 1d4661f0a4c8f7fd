// src/models/batch.rs

//! BATCH-MANUAL export documents.
//!
//! This file layout is the durable contract consumed by the Tachi
//! batch-manual importer; field names and constants must not drift.

use serde::{Deserialize, Serialize};

use super::score::{CrawlResult, Playstyle, ScoreRecord};

/// Game identifier in the export metadata.
pub const GAME: &str = "iidx";

/// Service name identifying this tool in the export metadata.
pub const SERVICE: &str = "kt-cg-iidx-exporter";

/// Export document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchMeta {
    pub game: String,
    pub playtype: Playstyle,
    pub service: String,
}

/// One BATCH-MANUAL export document, covering a single play mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchManual {
    pub meta: BatchMeta,
    pub scores: Vec<ScoreRecord>,
}

impl BatchManual {
    fn new(playtype: Playstyle, scores: Vec<ScoreRecord>) -> Self {
        Self {
            meta: BatchMeta {
                game: GAME.to_string(),
                playtype,
                service: SERVICE.to_string(),
            },
            scores,
        }
    }

    /// Normalize a crawl result into export documents, one per non-empty
    /// play mode. Empty partitions produce no document, so an SP-only
    /// player gets exactly one file.
    pub fn from_result(result: &CrawlResult) -> Vec<Self> {
        let mut documents = Vec::new();
        if !result.sp.is_empty() {
            documents.push(Self::new(Playstyle::Sp, result.sp.clone()));
        }
        if !result.dp.is_empty() {
            documents.push(Self::new(Playstyle::Dp, result.dp.clone()));
        }
        documents
    }

    pub fn playtype(&self) -> Playstyle {
        self.meta.playtype
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Judgements, MatchType};

    fn sample_record() -> ScoreRecord {
        ScoreRecord {
            match_type: MatchType::InGameId,
            identifier: "1000".to_string(),
            difficulty: Difficulty::Normal,
            lamp: "CLEAR".to_string(),
            score: 100,
            time_achieved: 0,
            judgements: Judgements { pgreat: 40, great: 20 },
        }
    }

    #[test]
    fn empty_result_produces_no_documents() {
        assert!(BatchManual::from_result(&CrawlResult::default()).is_empty());
    }

    #[test]
    fn sp_only_result_produces_one_document() {
        let result = CrawlResult {
            sp: vec![sample_record(), sample_record()],
            dp: vec![],
        };
        let documents = BatchManual::from_result(&result);
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].playtype(), Playstyle::Sp);
        assert_eq!(documents[0].scores.len(), 2);
    }

    #[test]
    fn both_modes_produce_two_documents() {
        let result = CrawlResult {
            sp: vec![sample_record()],
            dp: vec![sample_record()],
        };
        let documents = BatchManual::from_result(&result);
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].playtype(), Playstyle::Sp);
        assert_eq!(documents[1].playtype(), Playstyle::Dp);
    }

    #[test]
    fn meta_matches_importer_contract() {
        let result = CrawlResult {
            sp: vec![],
            dp: vec![sample_record()],
        };
        let value = serde_json::to_value(&BatchManual::from_result(&result)[0]).unwrap();
        assert_eq!(value["meta"]["game"], "iidx");
        assert_eq!(value["meta"]["playtype"], "DP");
        assert_eq!(value["meta"]["service"], "kt-cg-iidx-exporter");
        assert!(value["scores"].is_array());
    }
}
