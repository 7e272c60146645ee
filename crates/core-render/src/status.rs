//! Status bar and message bar composition.
//!
//! Two stages: `compose_status` produces ordered segments, `format_status`
//! lays them out into exactly `width` columns (left part, padding, right
//! part). The right part is dropped when it does not fit.

use std::fmt::Write as _;

/// File name characters shown before truncation.
const NAME_WIDTH: usize = 20;

/// Everything the status bar shows.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a str>,
    pub rows: usize,
    pub dirty: bool,
    pub file_type: Option<&'a str>,
    /// 0-based cursor row.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    FileName(&'a str),
    LineCount(usize),
    Modified,
    FileType(&'a str),
    Position { line_1: usize, rows: usize },
}

impl StatusSegment<'_> {
    fn is_right(&self) -> bool {
        matches!(self, StatusSegment::FileType(_) | StatusSegment::Position { .. })
    }
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let mut out = Vec::with_capacity(5);
    out.push(StatusSegment::FileName(ctx.file_name.unwrap_or("[No Name]")));
    out.push(StatusSegment::LineCount(ctx.rows));
    if ctx.dirty {
        out.push(StatusSegment::Modified);
    }
    out.push(StatusSegment::FileType(ctx.file_type.unwrap_or("no ft")));
    out.push(StatusSegment::Position {
        line_1: ctx.line + 1,
        rows: ctx.rows,
    });
    out
}

pub fn format_status(segments: &[StatusSegment<'_>], width: usize) -> String {
    let mut left = String::with_capacity(48);
    let mut right = String::with_capacity(24);
    for seg in segments {
        let s = if seg.is_right() { &mut right } else { &mut left };
        match seg {
            StatusSegment::FileName(name) => s.extend(name.chars().take(NAME_WIDTH)),
            StatusSegment::LineCount(n) => {
                let _ = write!(s, " - {n} lines");
            }
            StatusSegment::Modified => s.push_str(" (modified)"),
            StatusSegment::FileType(ft) => s.push_str(ft),
            StatusSegment::Position { line_1, rows } => {
                let _ = write!(s, " | {line_1}/{rows}");
            }
        }
    }
    layout(&left, &right, width)
}

/// Message bar: message on the left, `Col: <rx+1>/<cols>` on the right.
pub fn format_message(message: Option<&str>, rx: usize, width: usize) -> String {
    let right = format!("Col: {}/{}", rx + 1, width);
    layout(message.unwrap_or(""), &right, width)
}

/// `left` truncated to `width`, then padded so `right` ends at the last
/// column. `right` is omitted when it would overlap `left`.
fn layout(left: &str, right: &str, width: usize) -> String {
    let mut out: String = left.chars().take(width).collect();
    let mut len = out.chars().count();
    let rlen = right.chars().count();
    while len < width {
        if width - len == rlen {
            out.push_str(right);
            break;
        }
        out.push(' ');
        len += 1;
    }
    out
}
