//! Document: ordered rows, dirty counter, and the active rule set.
//!
//! Rows live in a `Vec`; structural edits shift every later row and cost O(n)
//! for the shift plus the `index` renumbering that follows it.
//!
//! Highlight propagation: a block comment opened or closed on one row changes
//! the state carried into the next. After any mutation the touched row is
//! recomputed, then a work queue walks forward, recomputing each following row
//! whose recorded carried-in state no longer matches the row above. The walk
//! stops at the first row that is already consistent, so an edit that does not
//! change carried state touches a single row. The queue keeps stack depth
//! constant no matter how many rows a cascade crosses.

use crate::row::Row;
use core_syntax::Syntax;
use std::collections::VecDeque;
use tracing::trace;

#[derive(Debug, Default)]
pub struct Document {
    rows: Vec<Row>,
    dirty: u64,
    syntax: Option<&'static Syntax>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `content` into rows on `\n`, stripping trailing `\r`/`\n` from
    /// each line. A final newline does not produce an extra empty row.
    pub fn from_bytes(content: &[u8]) -> Self {
        let mut lines: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
        if content.is_empty() || content.ends_with(b"\n") {
            lines.pop();
        }
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                let end = line
                    .iter()
                    .rposition(|&b| b != b'\r' && b != b'\n')
                    .map_or(0, |p| p + 1);
                Row::new(idx, line[..end].to_vec())
            })
            .collect();
        Self {
            rows,
            dirty: 0,
            syntax: None,
        }
    }

    /// Rows joined with a single `\n` terminator each.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }
    /// Raw length of row `idx`, 0 for the implicit line past the end.
    pub fn row_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::len)
    }

    /// Number of content mutations since load or the last save.
    pub fn dirty(&self) -> u64 {
        self.dirty
    }
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }
    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    pub fn syntax(&self) -> Option<&'static Syntax> {
        self.syntax
    }

    /// Switch rule set and recompute every row from the top.
    pub fn set_syntax(&mut self, syntax: Option<&'static Syntax>) {
        self.syntax = syntax;
        let mut carried = false;
        for row in &mut self.rows {
            row.rehighlight(carried, syntax);
            carried = row.open_comment();
        }
        trace!(
            target: "text.highlight",
            syntax = syntax.map(|s| s.name),
            rows = self.rows.len(),
            "rehighlight_all"
        );
    }

    /// Insert a new row at `at` (clamped to `[0, len]`).
    pub fn insert_row(&mut self, at: usize, bytes: &[u8]) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(at, bytes.to_vec()));
        self.reindex_from(at + 1);
        self.dirty += 1;
        self.rehighlight_from(at);
    }

    /// Remove row `at`. No-op when `at` is out of range.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.reindex_from(at);
        self.dirty += 1;
        self.settle_from(at);
    }

    /// Replace the raw content of row `idx`.
    pub fn set_row(&mut self, idx: usize, bytes: &[u8]) {
        let Some(row) = self.rows.get_mut(idx) else {
            return;
        };
        row.set_raw(bytes.to_vec());
        self.dirty += 1;
        self.rehighlight_from(idx);
    }

    /// Insert byte `c` into row `idx` at `at` (clamped to the row length).
    pub fn insert_char(&mut self, idx: usize, at: usize, c: u8) {
        let Some(row) = self.rows.get_mut(idx) else {
            return;
        };
        row.insert_byte(at, c);
        self.dirty += 1;
        self.rehighlight_from(idx);
    }

    /// Delete the byte at `at` in row `idx`; nothing happens past the end.
    pub fn delete_char(&mut self, idx: usize, at: usize) {
        let Some(row) = self.rows.get_mut(idx) else {
            return;
        };
        if !row.delete_byte(at) {
            return;
        }
        self.dirty += 1;
        self.rehighlight_from(idx);
    }

    pub fn append_bytes(&mut self, idx: usize, bytes: &[u8]) {
        let Some(row) = self.rows.get_mut(idx) else {
            return;
        };
        row.append_bytes(bytes);
        self.dirty += 1;
        self.rehighlight_from(idx);
    }

    /// Split row `idx` at `at`: the row keeps `raw[..at]`, a new row holding
    /// the remainder is inserted right after it.
    pub fn split_row(&mut self, idx: usize, at: usize) {
        let Some(row) = self.rows.get_mut(idx) else {
            return;
        };
        let tail = row.split_off(at);
        self.rows.insert(idx + 1, Row::new(idx + 1, tail));
        self.reindex_from(idx + 2);
        self.dirty += 1;
        self.rehighlight_from(idx);
        self.rehighlight_from(idx + 1);
    }

    /// Append row `idx` onto the row above it and remove it. Returns the
    /// previous row's length before the join (where a cursor should land), or
    /// `None` when there is no row above.
    pub fn join_with_previous(&mut self, idx: usize) -> Option<usize> {
        if idx == 0 || idx >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(idx).into_raw();
        self.reindex_from(idx);
        let prev = &mut self.rows[idx - 1];
        let joint = prev.len();
        prev.append_bytes(&removed);
        self.dirty += 1;
        self.rehighlight_from(idx - 1);
        self.settle_from(idx);
        Some(joint)
    }

    fn reindex_from(&mut self, start: usize) {
        for (idx, row) in self.rows.iter_mut().enumerate().skip(start) {
            row.set_index(idx);
        }
    }

    /// Recompute row `start` unconditionally, then cascade.
    fn rehighlight_from(&mut self, start: usize) {
        self.propagate(start, true);
    }

    /// Recompute row `start` only if its carried-in state is stale, then cascade.
    fn settle_from(&mut self, start: usize) {
        self.propagate(start, false);
    }

    fn propagate(&mut self, start: usize, force_first: bool) {
        let mut queue = VecDeque::from([(start, force_first)]);
        let mut recomputed = 0usize;
        while let Some((idx, force)) = queue.pop_front() {
            if idx >= self.rows.len() {
                continue;
            }
            let carried = idx > 0 && self.rows[idx - 1].open_comment();
            let row = &mut self.rows[idx];
            if !force && row.comment_in() == carried {
                continue;
            }
            row.rehighlight(carried, self.syntax);
            recomputed += 1;
            queue.push_back((idx + 1, false));
        }
        if recomputed > 1 {
            trace!(target: "text.highlight", start, recomputed, "highlight_cascade");
        }
    }
}
