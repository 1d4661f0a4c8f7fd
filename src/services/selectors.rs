// src/services/selectors.rs

//! CSS selectors describing the score-grid markup contract.
//!
//! The profile page is an unversioned, fragile contract; keeping the whole
//! row shape in one place means a silent site redesign surfaces as a single
//! markup-shape error instead of scattered missing-element failures.

use scraper::Selector;

use crate::error::{AppError, Result};

/// Pre-parsed selectors for the score grid and its row internals.
///
/// Row layout, relative to one `.grid-x` row of the grid:
/// - first direct `.cell`: chart link (`a`, song ID in the path), chart
///   label (second `strong`, e.g. `SPH`), lamp (`.label`)
/// - third direct `.cell`: score `strong` (judgement counts in its `title`
///   attribute) and the timestamp in the second nested `.cell`
#[derive(Debug, Clone)]
pub struct ScoreGridSelectors {
    /// The score-grid container
    pub grid: Selector,

    /// `strong` elements within the chart cell; the second one is the
    /// chart label carrying the play-mode marker and difficulty glyph
    pub strong: Selector,

    /// Chart link within the chart cell
    pub chart_link: Selector,

    /// Lamp label within the chart cell
    pub lamp: Selector,

    /// Nested cells within the score cell; the second one holds the
    /// achievement timestamp
    pub sub_cell: Selector,
}

impl ScoreGridSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            grid: parse(".score-grid")?,
            strong: parse("strong")?,
            chart_link: parse("a")?,
            lamp: parse(".label")?,
            sub_cell: parse(".cell")?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::selector(selector, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selectors_compile() {
        assert!(ScoreGridSelectors::new().is_ok());
    }
}
