// src/models/page.rs

//! Page-range planning for the paginated score listing.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};

/// Position within the paginated score listing, derived once per export run.
///
/// The site is assumed not to reorder pages mid-crawl, so this stays fixed
/// for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Page currently displayed (1-based)
    pub current_page: u32,

    /// Total number of pages in the listing
    pub total_pages: u32,
}

impl PageInfo {
    /// Derive the page info from a profile page document.
    ///
    /// The pager is the sibling element directly after the score grid, with
    /// text of the form `"Page {current} of {total}"`. A listing short
    /// enough to have no pager is a single page.
    pub fn from_document(document: &Html) -> Result<Self> {
        let pager_sel = Selector::parse(".score-grid + *")
            .map_err(|e| AppError::selector(".score-grid + *", format!("{e:?}")))?;

        let Some(pager) = document.select(&pager_sel).next() else {
            return Ok(Self {
                current_page: 1,
                total_pages: 1,
            });
        };

        let text: String = pager.text().collect();
        let words: Vec<&str> = text.split_whitespace().collect();
        let parse_word = |idx: usize| -> Result<u32> {
            words
                .get(idx)
                .and_then(|w| w.parse().ok())
                .ok_or_else(|| AppError::markup("pager", format!("unexpected text '{}'", text.trim())))
        };

        Ok(Self {
            current_page: parse_word(1)?,
            total_pages: parse_word(3)?,
        })
    }

    /// Compute the ordered sequence of pages to visit.
    ///
    /// Starts at the current page and walks forward one page at a time,
    /// stopping at the last page or after `page_limit` entries, whichever
    /// comes first. Always non-empty, strictly increasing, contiguous.
    pub fn queue(&self, page_limit: usize) -> Vec<u32> {
        (self.current_page..=self.total_pages)
            .take(page_limit.max(1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(current_page: u32, total_pages: u32) -> PageInfo {
        PageInfo {
            current_page,
            total_pages,
        }
    }

    #[test]
    fn queue_starts_at_current_page() {
        let queue = info(3, 7).queue(10);
        assert_eq!(queue, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn queue_capped_by_page_limit() {
        let queue = info(1, 50).queue(10);
        assert_eq!(queue, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn queue_length_is_min_of_limit_and_remaining() {
        for (current, total, limit) in [(1u32, 3u32, 10usize), (2, 2, 5), (5, 40, 3), (1, 1, 1)] {
            let queue = info(current, total).queue(limit);
            let remaining = (total - current + 1) as usize;
            assert_eq!(queue.len(), remaining.min(limit));
            assert_eq!(queue[0], current);
            // contiguous ascending
            assert!(queue.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }

    #[test]
    fn queue_never_empty() {
        assert_eq!(info(4, 4).queue(1), vec![4]);
    }

    #[test]
    fn from_document_reads_pager_text() {
        let html = Html::parse_document(
            r#"<div class="score-grid"></div><div class="pager">Page 2 of 14</div>"#,
        );
        let page_info = PageInfo::from_document(&html).unwrap();
        assert_eq!(page_info, PageInfo { current_page: 2, total_pages: 14 });
    }

    #[test]
    fn from_document_defaults_to_single_page() {
        let html = Html::parse_document(r#"<div class="score-grid"></div>"#);
        let page_info = PageInfo::from_document(&html).unwrap();
        assert_eq!(page_info, PageInfo { current_page: 1, total_pages: 1 });
    }

    #[test]
    fn from_document_rejects_garbled_pager() {
        let html = Html::parse_document(
            r#"<div class="score-grid"></div><div>no numbers here at all</div>"#,
        );
        assert!(PageInfo::from_document(&html).is_err());
    }
}
