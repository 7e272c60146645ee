//! Editor model: session state plus the single view onto it.
//!
//! `View` owns the presentation side of the session: the logical cursor
//! (`cx`, `cy`), its rendered column `rx`, and the `Viewport` scroll offsets.
//!
//! Invariants (after every `View::scroll`):
//! * `cy <= document.len()`; `cy == len` is the implicit empty line past EOF.
//! * `cx <= row_len(cy)` (0 past EOF).
//! * `rx == row.cx_to_rx(cx)`, or 0 past EOF.
//! * The cursor cell lies inside the viewport.

use core_state::EditorState;
use core_text::Document;

mod viewport;
pub use viewport::{Viewport, scroll_offset};

#[derive(Debug, Clone, Default)]
pub struct View {
    pub cx: usize,
    pub cy: usize,
    pub rx: usize,
    pub viewport: Viewport,
}

impl View {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Clamp `cx` to the length of the row under the cursor.
    pub fn clamp_cx(&mut self, doc: &Document) {
        self.cy = self.cy.min(doc.len());
        self.cx = self.cx.min(doc.row_len(self.cy));
    }

    /// Recompute `rx` and move the viewport so the cursor is visible.
    pub fn scroll(&mut self, doc: &Document) {
        self.clamp_cx(doc);
        self.rx = doc.row(self.cy).map_or(0, |row| row.cx_to_rx(self.cx));
        self.viewport.scroll_to(self.cy, self.rx);
    }

    /// Screen position (column, row) of the cursor inside the text area.
    pub fn screen_cursor(&self) -> (usize, usize) {
        (
            self.rx.saturating_sub(self.viewport.col_offset),
            self.cy.saturating_sub(self.viewport.row_offset),
        )
    }
}

#[derive(Debug)]
pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, viewport: Viewport) -> Self {
        Self {
            state,
            view: View::new(viewport),
        }
    }
    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Disjoint mutable borrows of state and view.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Re-establish the view invariants after a state change.
    pub fn scroll(&mut self) {
        self.view.scroll(&self.state.document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(text: &[u8], rows: usize, cols: usize) -> EditorModel {
        EditorModel::new(
            EditorState::new(Document::from_bytes(text)),
            Viewport::new(rows, cols),
        )
    }

    #[test]
    fn scroll_computes_rx_through_tabs() {
        let mut m = model(b"a\tb\n", 5, 40);
        m.view_mut().cx = 2;
        m.scroll();
        assert_eq!(m.view().rx, 8);
        assert_eq!(m.view().screen_cursor(), (8, 0));
    }

    #[test]
    fn past_eof_has_zero_rx() {
        let mut m = model(b"abc\n", 5, 40);
        m.view_mut().cy = 1;
        m.view_mut().cx = 3;
        m.scroll();
        assert_eq!(m.view().cx, 0);
        assert_eq!(m.view().rx, 0);
    }

    #[test]
    fn cy_clamped_to_row_count() {
        let mut m = model(b"a\nb\n", 5, 40);
        m.view_mut().cy = 9;
        m.scroll();
        assert_eq!(m.view().cy, 2);
    }

    #[test]
    fn cursor_kept_in_window() {
        let text: Vec<u8> = (0..50).flat_map(|i| format!("line {i}\n").into_bytes()).collect();
        let mut m = model(&text, 10, 4);
        m.view_mut().cy = 30;
        m.view_mut().cx = 6;
        m.scroll();
        let v = m.view();
        assert!(v.cy >= v.viewport.row_offset && v.cy < v.viewport.bottom());
        assert!(v.rx >= v.viewport.col_offset && v.rx < v.viewport.col_offset + v.viewport.cols);
    }
}
