//! Visible window into the document.
//!
//! `rows`/`cols` are the text area only; the caller subtracts the status and
//! message bars before handing the terminal size in.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows,
            cols,
        }
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Shift offsets so that (`cy`, `rx`) lies inside the window.
    pub fn scroll_to(&mut self, cy: usize, rx: usize) {
        self.row_offset = scroll_offset(self.row_offset, cy, self.rows);
        self.col_offset = scroll_offset(self.col_offset, rx, self.cols);
    }

    /// Last document row index (exclusive) covered by the window.
    pub fn bottom(&self) -> usize {
        self.row_offset + self.rows
    }
}

/// New leading offset keeping `pos` within `[offset, offset + extent)`.
///
/// With a zero extent the offset simply follows `pos`.
pub fn scroll_offset(offset: usize, pos: usize, extent: usize) -> usize {
    if pos < offset {
        pos
    } else if extent == 0 {
        pos
    } else if pos >= offset + extent {
        pos + 1 - extent
    } else {
        offset
    }
}
