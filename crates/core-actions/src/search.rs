//! Incremental search over rendered row text.
//!
//! Each step scans at most one full pass over the document, starting one row
//! past the last match in the chosen direction and wrapping at either end.
//! Matching is a literal byte substring test against `Row::render`; the hit
//! is reported in render coordinates and translated back to a raw column.

use core_state::{MatchOverlay, SearchDirection};
use core_text::Document;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub row: usize,
    /// Raw column of the match start.
    pub cx: usize,
    pub overlay: MatchOverlay,
}

/// First offset of `needle` in `haystack`.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Locate the next row containing `query`.
///
/// With no previous match the scan always starts forward from row 0. An
/// empty query never matches.
pub fn find_next(
    doc: &Document,
    query: &[u8],
    last_match: Option<usize>,
    direction: SearchDirection,
) -> Option<SearchHit> {
    let len = doc.len();
    if len == 0 || query.is_empty() {
        return None;
    }
    let (mut current, direction) = match last_match {
        Some(row) => (row.min(len - 1), direction),
        // step() from the last row lands on row 0
        None => (len - 1, SearchDirection::Forward),
    };
    for _ in 0..len {
        current = direction.step(current, len);
        let Some(row) = doc.row(current) else {
            continue;
        };
        if let Some(rx) = find_bytes(row.render(), query) {
            debug!(target: "search", row = current, rx, "match");
            return Some(SearchHit {
                row: current,
                cx: row.rx_to_cx(rx),
                overlay: MatchOverlay {
                    row: current,
                    start: rx,
                    len: query.len(),
                },
            });
        }
    }
    debug!(target: "search", query_len = query.len(), "no_match");
    None
}
