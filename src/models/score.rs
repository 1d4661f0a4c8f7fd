// src/models/score.rs

//! Score record structures matching the BATCH-MANUAL score schema.

use serde::{Deserialize, Serialize};

/// Identifier scheme for extracted charts. Cardinal-Gate exposes the in-game
/// song ID in its chart URLs, so this is the only scheme used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchType {
    #[default]
    #[serde(rename = "inGameID")]
    InGameId,
}

/// Play mode of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playstyle {
    #[serde(rename = "SP")]
    Sp,
    #[serde(rename = "DP")]
    Dp,
}

impl Playstyle {
    /// Map the two-character marker from the chart label ("SP" / "DP").
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "SP" => Some(Self::Sp),
            "DP" => Some(Self::Dp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sp => "SP",
            Self::Dp => "DP",
        }
    }
}

/// Chart difficulty.
///
/// The export schema does not track BEGINNER charts; extraction drops those
/// rows entirely, so serialized records only ever carry the other four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Beginner,
    Normal,
    Hyper,
    Another,
    Leggendaria,
}

impl Difficulty {
    /// Map the single-letter glyph from the chart label.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'B' => Some(Self::Beginner),
            'N' => Some(Self::Normal),
            'H' => Some(Self::Hyper),
            'A' => Some(Self::Another),
            'L' => Some(Self::Leggendaria),
            _ => None,
        }
    }
}

/// Timing-accuracy counts for a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgements {
    pub pgreat: u32,
    pub great: u32,
}

/// One play record extracted from the score grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub match_type: MatchType,

    /// In-game song ID taken from the chart link
    pub identifier: String,

    pub difficulty: Difficulty,

    /// Clear-status label, e.g. "FULL COMBO"
    pub lamp: String,

    /// EX score
    pub score: u32,

    /// Unix milliseconds
    pub time_achieved: i64,

    pub judgements: Judgements,
}

/// Accumulated records, partitioned by play mode.
///
/// Append-only for the duration of a crawl; insertion order is
/// page-then-within-page encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlResult {
    pub sp: Vec<ScoreRecord>,
    pub dp: Vec<ScoreRecord>,
}

impl CrawlResult {
    /// Route a record into the partition for its play mode.
    pub fn push(&mut self, playstyle: Playstyle, record: ScoreRecord) {
        match playstyle {
            Playstyle::Sp => self.sp.push(record),
            Playstyle::Dp => self.dp.push(record),
        }
    }

    /// Append another result, preserving encounter order.
    pub fn extend(&mut self, other: CrawlResult) {
        self.sp.extend(other.sp);
        self.dp.extend(other.dp);
    }

    pub fn is_empty(&self) -> bool {
        self.sp.is_empty() && self.dp.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_glyph_mapping() {
        assert_eq!(Difficulty::from_glyph('B'), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::from_glyph('N'), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_glyph('H'), Some(Difficulty::Hyper));
        assert_eq!(Difficulty::from_glyph('A'), Some(Difficulty::Another));
        assert_eq!(Difficulty::from_glyph('L'), Some(Difficulty::Leggendaria));
        assert_eq!(Difficulty::from_glyph('X'), None);
    }

    #[test]
    fn playstyle_marker_mapping() {
        assert_eq!(Playstyle::from_marker("SP"), Some(Playstyle::Sp));
        assert_eq!(Playstyle::from_marker("DP"), Some(Playstyle::Dp));
        assert_eq!(Playstyle::from_marker("XX"), None);
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = ScoreRecord {
            match_type: MatchType::InGameId,
            identifier: "27003".to_string(),
            difficulty: Difficulty::Another,
            lamp: "HARD CLEAR".to_string(),
            score: 2412,
            time_achieved: 1_700_000_000_000,
            judgements: Judgements {
                pgreat: 1000,
                great: 412,
            },
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["matchType"], "inGameID");
        assert_eq!(value["difficulty"], "ANOTHER");
        assert_eq!(value["timeAchieved"], 1_700_000_000_000_i64);
        assert_eq!(value["judgements"]["pgreat"], 1000);
        assert_eq!(value["judgements"]["great"], 412);
    }

    #[test]
    fn crawl_result_extend_preserves_order() {
        let record = |id: &str| ScoreRecord {
            match_type: MatchType::InGameId,
            identifier: id.to_string(),
            difficulty: Difficulty::Hyper,
            lamp: "CLEAR".to_string(),
            score: 1,
            time_achieved: 0,
            judgements: Judgements { pgreat: 0, great: 0 },
        };

        let mut total = CrawlResult::default();
        let mut page1 = CrawlResult::default();
        page1.push(Playstyle::Sp, record("1"));
        page1.push(Playstyle::Dp, record("2"));
        let mut page2 = CrawlResult::default();
        page2.push(Playstyle::Sp, record("3"));

        total.extend(page1);
        total.extend(page2);

        let sp_ids: Vec<_> = total.sp.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(sp_ids, vec!["1", "3"]);
        assert_eq!(total.dp.len(), 1);
    }
}
