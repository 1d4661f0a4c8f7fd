// src/services/scores.rs

//! Score-grid extraction.
//!
//! Parses one profile page's score grid into typed records, partitioned by
//! play mode. Any missing element or attribute aborts the whole page: a
//! markup change upstream must not be papered over with partial data.

use scraper::{ElementRef, Html};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{CrawlResult, Difficulty, Judgements, MatchType, Playstyle, ScoreRecord};
use crate::services::datetime;
use crate::services::selectors::ScoreGridSelectors;

/// Extracts score records from profile page documents.
pub struct ScoreExtractor {
    selectors: ScoreGridSelectors,
}

impl ScoreExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: ScoreGridSelectors::new()?,
        })
    }

    /// Extract every score record from one page, in document order.
    ///
    /// BEGINNER rows produce no record; the export schema does not track
    /// beginner charts.
    pub fn extract_page(&self, document: &Html) -> Result<CrawlResult> {
        let grid = document
            .select(&self.selectors.grid)
            .next()
            .ok_or_else(|| AppError::markup("document", "score grid not found"))?;

        let mut result = CrawlResult::default();
        for row in direct_children_with_class(grid, "grid-x") {
            if let Some((playstyle, record)) = self.extract_row(row)? {
                result.push(playstyle, record);
            }
        }
        Ok(result)
    }

    /// Extract a single row, or `None` for a dropped BEGINNER row.
    fn extract_row(&self, row: ElementRef) -> Result<Option<(Playstyle, ScoreRecord)>> {
        let cells = direct_children_with_class(row, "cell");
        let chart_cell = *cells
            .first()
            .ok_or_else(|| AppError::markup("row", "chart cell missing"))?;
        let score_cell = *cells
            .get(2)
            .ok_or_else(|| AppError::markup("row", "score cell missing"))?;

        // Chart label, e.g. "SPH": play-mode marker up front, difficulty
        // glyph at the end.
        let chart_label = element_text(
            chart_cell
                .select(&self.selectors.strong)
                .nth(1)
                .ok_or_else(|| AppError::markup("chart cell", "chart label missing"))?,
        );
        let glyph = chart_label
            .chars()
            .last()
            .ok_or_else(|| AppError::markup("chart label", "empty label"))?;
        let difficulty = Difficulty::from_glyph(glyph)
            .ok_or_else(|| AppError::markup("chart label", format!("unknown glyph '{glyph}'")))?;
        if difficulty == Difficulty::Beginner {
            return Ok(None);
        }

        let marker = chart_label.get(..2).unwrap_or_default();
        let playstyle = Playstyle::from_marker(marker).ok_or_else(|| {
            AppError::markup("chart label", format!("unknown play mode '{marker}'"))
        })?;

        let href = chart_cell
            .select(&self.selectors.chart_link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| AppError::markup("chart cell", "chart link missing"))?;
        let identifier = chart_identifier(href)?;

        let lamp = element_text(
            chart_cell
                .select(&self.selectors.lamp)
                .next()
                .ok_or_else(|| AppError::markup("chart cell", "lamp label missing"))?,
        );

        let score_strong = score_cell
            .select(&self.selectors.strong)
            .next()
            .ok_or_else(|| AppError::markup("score cell", "score element missing"))?;
        let score = parse_score(&element_text(score_strong))?;

        let tooltip = score_strong
            .value()
            .attr("title")
            .ok_or_else(|| AppError::markup("judgements", "tooltip attribute missing"))?;
        let judgements = parse_judgements(tooltip)?;

        let timestamp_text = element_text(
            score_cell
                .select(&self.selectors.sub_cell)
                .nth(1)
                .ok_or_else(|| AppError::markup("score cell", "timestamp cell missing"))?,
        );
        let time_achieved = datetime::parse_timestamp(&timestamp_text)?;

        Ok(Some((
            playstyle,
            ScoreRecord {
                match_type: MatchType::InGameId,
                identifier,
                difficulty,
                lamp,
                score,
                time_achieved,
                judgements,
            },
        )))
    }
}

/// Direct element children carrying the given class.
fn direct_children_with_class<'a>(element: ElementRef<'a>, class: &str) -> Vec<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().classes().any(|c| c == class))
        .collect()
}

/// Collected, trimmed text content of an element.
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// The in-game song ID is the fourth path segment of the chart link,
/// whether the href is absolute or site-relative.
fn chart_identifier(href: &str) -> Result<String> {
    let path = match Url::parse(href) {
        Ok(url) => url.path().to_string(),
        // Relative href: strip query/fragment, keep the path.
        Err(_) => href.split(['?', '#']).next().unwrap_or("").to_string(),
    };

    path.trim_start_matches('/')
        .split('/')
        .nth(3)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::markup("chart link", format!("no song ID in '{href}'")))
}

/// Score text is "{score} ({grade})"; keep the leading token, drop the
/// thousands separators.
fn parse_score(text: &str) -> Result<u32> {
    let token = text
        .split_whitespace()
        .next()
        .ok_or_else(|| AppError::markup("score cell", "empty score text"))?;
    token
        .replace(',', "")
        .parse()
        .map_err(|_| AppError::markup("score cell", format!("unparseable score '{token}'")))
}

/// Tooltip text is exactly two comma-separated clauses, each starting with
/// a count: "300 PGREAT, 50 GREAT".
fn parse_judgements(tooltip: &str) -> Result<Judgements> {
    let (pgreat_clause, great_clause) = tooltip.split_once(',').ok_or_else(|| {
        AppError::markup("judgements", format!("expected two clauses in '{tooltip}'"))
    })?;

    Ok(Judgements {
        pgreat: parse_count(pgreat_clause)?,
        great: parse_count(great_clause)?,
    })
}

fn parse_count(clause: &str) -> Result<u32> {
    clause
        .trim()
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| AppError::markup("judgements", format!("unparseable count in '{clause}'")))
}
