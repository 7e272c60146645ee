use crate::coords::{cx_to_rx, expand_tabs, rx_to_cx};
use core_syntax::{Highlight, Syntax, highlight_into};

/// One logical line plus its derived render and highlight state.
#[derive(Debug, Clone)]
pub struct Row {
    raw: Vec<u8>,
    render: Vec<u8>,
    highlight: Vec<Highlight>,
    /// Block comment still open at the end of this row.
    open_comment: bool,
    /// Block comment state this row's highlight was computed with.
    comment_in: bool,
    index: usize,
}

impl Row {
    /// Build a row whose highlight is all `Normal` until the document
    /// recomputes it.
    pub(crate) fn new(index: usize, raw: Vec<u8>) -> Self {
        let render = expand_tabs(&raw);
        let highlight = vec![Highlight::Normal; render.len()];
        Self {
            raw,
            render,
            highlight,
            open_comment: false,
            comment_in: false,
            index,
        }
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
    pub fn render(&self) -> &[u8] {
        &self.render
    }
    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }
    pub fn open_comment(&self) -> bool {
        self.open_comment
    }
    pub fn index(&self) -> usize {
        self.index
    }
    /// Raw length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn cx_to_rx(&self, cx: usize) -> usize {
        cx_to_rx(&self.raw, cx)
    }
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        rx_to_cx(&self.raw, rx)
    }

    pub(crate) fn comment_in(&self) -> bool {
        self.comment_in
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn set_raw(&mut self, bytes: Vec<u8>) {
        self.raw = bytes;
        self.update_render();
    }

    /// Insert `c` at `at`, clamped to `[0, len]`.
    pub(crate) fn insert_byte(&mut self, at: usize, c: u8) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, c);
        self.update_render();
    }

    /// Remove the byte at `at`. Returns false (no change) when `at` is past
    /// the last byte.
    pub(crate) fn delete_byte(&mut self, at: usize) -> bool {
        if at >= self.raw.len() {
            return false;
        }
        self.raw.remove(at);
        self.update_render();
        true
    }

    pub(crate) fn append_bytes(&mut self, bytes: &[u8]) {
        self.raw.extend_from_slice(bytes);
        self.update_render();
    }

    /// Cut the row at `at` (clamped), returning the tail.
    pub(crate) fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.update_render();
        tail
    }

    pub(crate) fn into_raw(self) -> Vec<u8> {
        self.raw
    }

    /// Recompute highlight for the given carried-in state. Returns true when
    /// the carried-out state changed.
    pub(crate) fn rehighlight(&mut self, comment_in: bool, syntax: Option<&Syntax>) -> bool {
        let before = self.open_comment;
        self.comment_in = comment_in;
        self.open_comment = highlight_into(&self.render, comment_in, syntax, &mut self.highlight);
        before != self.open_comment
    }

    fn update_render(&mut self) {
        self.render = expand_tabs(&self.raw);
        // keep lengths aligned until the owning document rehighlights
        self.highlight.resize(self.render.len(), Highlight::Normal);
    }
}
